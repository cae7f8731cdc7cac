use std::fmt;

/// The reference systems this tool knows about. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceSystem {
    /// WGS 84 geographic coordinates, longitude/latitude in degrees.
    Wgs84,
    /// Accra / Ghana National Grid, Gold Coast feet.
    GhanaNationalGrid,
    /// Leigon / Ghana Metre Grid, metres.
    GhanaMetreGrid,
}

impl ReferenceSystem {
    pub const ALL: [ReferenceSystem; 3] = [
        ReferenceSystem::Wgs84,
        ReferenceSystem::GhanaNationalGrid,
        ReferenceSystem::GhanaMetreGrid,
    ];

    /// Name used in selection labels.
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceSystem::Wgs84 => "WGS 84",
            ReferenceSystem::GhanaNationalGrid => "Ghana National Grid",
            ReferenceSystem::GhanaMetreGrid => "Ghana Meter Grid",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ReferenceSystem::Wgs84 => "wgs84",
            ReferenceSystem::GhanaNationalGrid => "gng",
            ReferenceSystem::GhanaMetreGrid => "gmg",
        }
    }

    /// Axis names as `(x, y)`.
    pub fn axes(&self) -> (&'static str, &'static str) {
        match self {
            ReferenceSystem::Wgs84 => ("Longitude", "Latitude"),
            _ => ("Easting", "Northing"),
        }
    }
}

impl fmt::Display for ReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
