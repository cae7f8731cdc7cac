//! The boundary towards the geodesy library.
//!
//! The service only depends on [`ProjectionProvider`]; concrete libraries live
//! in adapters such as [`crate::proj`].

use ghcoord_common::crs::CrsDefinition;
use ghcoord_common::geo::Coordinate;
use thiserror::Error;

/// Failure reported by a projection library. The text is kept as the library
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

pub trait ProjectionProvider {
    /// Converts `coordinate` from `source` to `target`.
    ///
    /// Geographic coordinates are passed and returned in degrees, projected
    /// ones in the units of their definition.
    fn convert(
        &self,
        source: &CrsDefinition,
        target: &CrsDefinition,
        coordinate: Coordinate,
    ) -> Result<Coordinate, ProviderError>;
}
