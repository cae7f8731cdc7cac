//! # Reference System Table
//!
//! Maps every [`ReferenceSystem`] to the definition handed to the projection
//! library. The table is built once, shared by reference and never mutated
//! afterwards.
//!
//! ## Definitions
//! * **EPSG:4326** WGS 84, geographic degrees.
//! * **EPSG:2136** Accra / Ghana National Grid. Transverse Mercator on the War
//!   Office ellipsoid, Gold Coast feet.
//! * **EPSG:25000** Leigon / Ghana Metre Grid. Transverse Mercator on Clarke
//!   1880 (RGS), metres.

use tracing::debug;

use crate::geo::ReferenceSystem;

const WGS84_PROJ: &str = "+proj=longlat +datum=WGS84 +no_defs";

const GHANA_NATIONAL_GRID_PROJ: &str = "+proj=tmerc +lat_0=4.666666666666667 +lon_0=-1 \
    +k=0.99975 +x_0=274319.7391633579 +y_0=0 +a=6378300 +b=6356751.689189189 \
    +towgs84=-199,32,322,0,0,0,0 +to_meter=0.3047997101815088 +no_defs";

const GHANA_METRE_GRID_PROJ: &str = "+proj=tmerc +lat_0=4.666666666666667 +lon_0=-1 \
    +k=0.99975 +x_0=274319.51 +y_0=0 +a=6378249.145 +b=6356514.869549776 \
    +towgs84=-130,29,364,0,0,0,0 +units=m +no_defs";

/// Everything the projection library needs to know about one system.
#[derive(Debug, Clone, PartialEq)]
pub struct CrsDefinition {
    pub system: ReferenceSystem,
    pub epsg: u32,
    pub name: String,
    /// PROJ.4 style parameter string.
    pub proj: String,
    /// Axes are longitude/latitude in degrees rather than projected units.
    pub geographic: bool,
}

impl CrsDefinition {
    pub fn new(system: ReferenceSystem, epsg: u32, name: &str, proj: &str, geographic: bool) -> Self {
        Self {
            system,
            epsg,
            name: name.to_string(),
            proj: proj.to_string(),
            geographic,
        }
    }

    pub fn authority(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrsRegistry {
    wgs84: CrsDefinition,
    ghana_national_grid: CrsDefinition,
    ghana_metre_grid: CrsDefinition,
}

impl CrsRegistry {
    pub fn standard() -> Self {
        Self {
            wgs84: CrsDefinition::new(ReferenceSystem::Wgs84, 4326, "WGS 84", WGS84_PROJ, true),
            ghana_national_grid: CrsDefinition::new(
                ReferenceSystem::GhanaNationalGrid,
                2136,
                "Accra / Ghana National Grid",
                GHANA_NATIONAL_GRID_PROJ,
                false,
            ),
            ghana_metre_grid: CrsDefinition::new(
                ReferenceSystem::GhanaMetreGrid,
                25000,
                "Leigon / Ghana Metre Grid",
                GHANA_METRE_GRID_PROJ,
                false,
            ),
        }
    }

    /// Replaces the definition of `definition.system`. Only meant for building
    /// a table before it is shared.
    pub fn with_definition(mut self, definition: CrsDefinition) -> Self {
        debug!(system = %definition.system, proj = %definition.proj, "overriding reference system definition");
        match definition.system {
            ReferenceSystem::Wgs84 => self.wgs84 = definition,
            ReferenceSystem::GhanaNationalGrid => self.ghana_national_grid = definition,
            ReferenceSystem::GhanaMetreGrid => self.ghana_metre_grid = definition,
        }
        self
    }

    pub fn definition(&self, system: ReferenceSystem) -> &CrsDefinition {
        match system {
            ReferenceSystem::Wgs84 => &self.wgs84,
            ReferenceSystem::GhanaNationalGrid => &self.ghana_national_grid,
            ReferenceSystem::GhanaMetreGrid => &self.ghana_metre_grid,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrsDefinition> {
        ReferenceSystem::ALL.into_iter().map(|system| self.definition(system))
    }
}

impl Default for CrsRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_uses_registry_codes() {
        let registry = CrsRegistry::standard();
        let codes: Vec<String> = registry.iter().map(|d| d.authority()).collect();
        assert_eq!(codes, vec!["EPSG:4326", "EPSG:2136", "EPSG:25000"]);
    }

    #[test]
    fn lookup_returns_matching_system() {
        let registry = CrsRegistry::standard();
        for system in ReferenceSystem::ALL {
            assert_eq!(registry.definition(system).system, system);
        }
        assert!(registry.definition(ReferenceSystem::Wgs84).geographic);
        assert!(!registry.definition(ReferenceSystem::GhanaMetreGrid).geographic);
    }

    #[test]
    fn override_replaces_only_one_entry() {
        let custom = CrsDefinition::new(ReferenceSystem::GhanaMetreGrid, 25000, "broken", "+proj=nope", false);
        let registry = CrsRegistry::standard().with_definition(custom.clone());

        assert_eq!(registry.definition(ReferenceSystem::GhanaMetreGrid), &custom);
        assert_eq!(
            registry.definition(ReferenceSystem::GhanaNationalGrid),
            CrsRegistry::standard().definition(ReferenceSystem::GhanaNationalGrid)
        );
    }
}
