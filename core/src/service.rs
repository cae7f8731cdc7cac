//! # Transformation Service
//!
//! Implements the "transform a coordinate pair" use case.
//!
//! The service owns no mutable state. A request goes through:
//! 1. **Validation**: both fields present, both parse as finite numbers.
//! 2. **Dispatch**: the selector is resolved to a `(source, target)` pair.
//! 3. **Projection**: the pair is handed to a [`ProjectionProvider`].
//!
//! Every failure comes back as [`TransformationResult::Failure`].

use std::sync::Arc;

use ghcoord_common::crs::CrsRegistry;
use ghcoord_common::error::TransformError;
use ghcoord_common::geo::{Coordinate, Transformation, TransformationResult};
use tracing::debug;

use crate::proj::Proj4rsProvider;
use crate::provider::ProjectionProvider;

pub struct TransformationService {
    registry: Arc<CrsRegistry>,
    provider: Box<dyn ProjectionProvider>,
}

impl TransformationService {
    pub fn new(registry: Arc<CrsRegistry>, provider: Box<dyn ProjectionProvider>) -> Self {
        Self { registry, provider }
    }

    /// Service over the standard reference system table and `proj4rs`.
    pub fn standard() -> Self {
        Self::with_registry(Arc::new(CrsRegistry::standard()))
    }

    pub fn with_registry(registry: Arc<CrsRegistry>) -> Self {
        let provider = Proj4rsProvider::with_registry(&registry);
        Self::new(registry, Box::new(provider))
    }

    pub fn registry(&self) -> &CrsRegistry {
        &self.registry
    }

    /// Transforms two raw text fields with a selection given as text.
    ///
    /// Validation happens in order: missing fields, then numbers, then the
    /// selection. The provider is only called when all three pass.
    pub fn transform(&self, raw_x: &str, raw_y: &str, selector: &str) -> TransformationResult {
        parse_coordinate(raw_x, raw_y)
            .and_then(|coordinate| Ok((coordinate, selector.parse::<Transformation>()?)))
            .and_then(|(coordinate, transformation)| self.convert(coordinate, transformation))
            .into()
    }

    /// Transforms an already validated request.
    pub fn transform_coordinate(
        &self,
        coordinate: Coordinate,
        transformation: Transformation,
    ) -> TransformationResult {
        self.convert(coordinate, transformation).into()
    }

    fn convert(
        &self,
        coordinate: Coordinate,
        transformation: Transformation,
    ) -> Result<Coordinate, TransformError> {
        let (source, target) = transformation.systems();
        debug!(%transformation, %coordinate, "transforming");

        let result = self
            .provider
            .convert(
                self.registry.definition(source),
                self.registry.definition(target),
                coordinate,
            )
            .map_err(|err| TransformError::Provider(err.0));

        match &result {
            Ok(converted) => debug!(%converted, "transform succeeded"),
            Err(err) => debug!(%err, "transform rejected by projection provider"),
        }
        result
    }
}

/// Validates two raw fields into a [`Coordinate`].
pub fn parse_coordinate(raw_x: &str, raw_y: &str) -> Result<Coordinate, TransformError> {
    if raw_x.is_empty() || raw_y.is_empty() {
        return Err(TransformError::MissingCoordinate);
    }

    Ok(Coordinate::new(parse_axis(raw_x)?, parse_axis(raw_y)?))
}

fn parse_axis(raw: &str) -> Result<f64, TransformError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(TransformError::InvalidNumber)
}
