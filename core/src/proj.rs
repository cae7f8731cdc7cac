//! [`ProjectionProvider`] backed by the pure Rust `proj4rs` library.

use std::collections::HashMap;

use ghcoord_common::crs::{CrsDefinition, CrsRegistry};
use ghcoord_common::geo::Coordinate;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::{debug, warn};

use crate::provider::{ProjectionProvider, ProviderError};

impl From<proj4rs::errors::Error> for ProviderError {
    fn from(err: proj4rs::errors::Error) -> Self {
        ProviderError(err.to_string())
    }
}

/// Parsed projections keyed by their definition string.
///
/// The cache is filled once in [`Proj4rsProvider::with_registry`]. Definitions
/// that were not known up front are parsed per call and not stored.
pub struct Proj4rsProvider {
    cache: HashMap<String, Result<Proj, ProviderError>>,
}

impl Proj4rsProvider {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn with_registry(registry: &CrsRegistry) -> Self {
        let mut cache = HashMap::new();

        for definition in registry.iter() {
            let parsed = parse(definition);
            if let Err(err) = &parsed {
                warn!("Definition of {} is not usable: {}", definition.name, err);
            }
            cache.insert(definition.proj.clone(), parsed);
        }

        Self { cache }
    }

    fn projection<'a>(
        &'a self,
        definition: &CrsDefinition,
        slot: &'a mut Option<Proj>,
    ) -> Result<&'a Proj, ProviderError> {
        match self.cache.get(&definition.proj) {
            Some(Ok(proj)) => Ok(proj),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(slot.insert(parse(definition)?)),
        }
    }
}

impl Default for Proj4rsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionProvider for Proj4rsProvider {
    fn convert(
        &self,
        source: &CrsDefinition,
        target: &CrsDefinition,
        coordinate: Coordinate,
    ) -> Result<Coordinate, ProviderError> {
        let mut source_slot = None;
        let mut target_slot = None;
        let source_proj = self.projection(source, &mut source_slot)?;
        let target_proj = self.projection(target, &mut target_slot)?;

        // proj4rs works in radians on geographic systems
        let mut point = if source.geographic {
            (coordinate.x.to_radians(), coordinate.y.to_radians(), 0.0)
        } else {
            (coordinate.x, coordinate.y, 0.0)
        };

        transform(source_proj, target_proj, &mut point)?;

        let converted = if target.geographic {
            Coordinate::new(point.0.to_degrees(), point.1.to_degrees())
        } else {
            Coordinate::new(point.0, point.1)
        };

        if !converted.is_finite() {
            return Err(ProviderError::new(format!(
                "Coordinate {} is outside the domain of {}",
                coordinate, target.name
            )));
        }

        debug!(from = %source.authority(), to = %target.authority(), %coordinate, %converted, "proj4rs transform");
        Ok(converted)
    }
}

fn parse(definition: &CrsDefinition) -> Result<Proj, ProviderError> {
    Proj::from_proj_string(&definition.proj).map_err(ProviderError::from)
}
