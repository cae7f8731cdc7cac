//! # ghcoord Core
//!
//! The transformation use case and its boundaries.
//!
//! * **[`service`]**: validates raw input and dispatches a [`Transformation`](ghcoord_common::geo::Transformation)
//!   to a projection provider.
//! * **[`provider`]**: the contract every projection library adapter fulfils.
//! * **[`proj`]**: the `proj4rs` adapter.
//! * **[`form`]**: output fields, the held result and the save action.

pub mod form;
pub mod proj;
pub mod provider;
pub mod service;
