//! # ghcoord Common
//!
//! Domain types shared by every crate of the workspace:
//!
//! * **[`geo`]**: coordinates, reference systems and the closed set of transformations.
//! * **[`crs`]**: the immutable table of reference system definitions.
//! * **[`error`]**: user-facing error taxonomy.
//! * **[`report`]**: the plain text report written by the save action.
//! * **[`config`]**: front end settings.

pub mod config;
pub mod crs;
pub mod error;
pub mod geo;
pub mod report;
