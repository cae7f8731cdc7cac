//! # Transformation Selector
//!
//! The closed set of directed conversions offered to the user.
//!
//! Selections arrive as text (a menu entry or a command line argument) and are
//! turned into a [`Transformation`] at the boundary. Accepted spellings:
//! * **Label**: "WGS 84 to Ghana National Grid" (case-insensitive).
//! * **Slug**: "wgs84-gng", "gmg-wgs84", ...

use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;
use crate::geo::system::ReferenceSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    Wgs84ToGhanaNationalGrid,
    Wgs84ToGhanaMetreGrid,
    GhanaNationalGridToWgs84,
    GhanaMetreGridToWgs84,
}

impl Transformation {
    /// Every selection, in menu order. The first entry is the default.
    pub const ALL: [Transformation; 4] = [
        Transformation::Wgs84ToGhanaNationalGrid,
        Transformation::Wgs84ToGhanaMetreGrid,
        Transformation::GhanaNationalGridToWgs84,
        Transformation::GhanaMetreGridToWgs84,
    ];

    /// Directed `(source, target)` pair.
    pub fn systems(&self) -> (ReferenceSystem, ReferenceSystem) {
        use ReferenceSystem::*;

        match self {
            Transformation::Wgs84ToGhanaNationalGrid => (Wgs84, GhanaNationalGrid),
            Transformation::Wgs84ToGhanaMetreGrid => (Wgs84, GhanaMetreGrid),
            Transformation::GhanaNationalGridToWgs84 => (GhanaNationalGrid, Wgs84),
            Transformation::GhanaMetreGridToWgs84 => (GhanaMetreGrid, Wgs84),
        }
    }

    pub fn source(&self) -> ReferenceSystem {
        self.systems().0
    }

    pub fn target(&self) -> ReferenceSystem {
        self.systems().1
    }

    /// The opposite direction.
    pub fn inverse(&self) -> Transformation {
        match self {
            Transformation::Wgs84ToGhanaNationalGrid => Transformation::GhanaNationalGridToWgs84,
            Transformation::Wgs84ToGhanaMetreGrid => Transformation::GhanaMetreGridToWgs84,
            Transformation::GhanaNationalGridToWgs84 => Transformation::Wgs84ToGhanaNationalGrid,
            Transformation::GhanaMetreGridToWgs84 => Transformation::Wgs84ToGhanaMetreGrid,
        }
    }

    pub fn label(&self) -> String {
        let (source, target) = self.systems();
        format!("{} to {}", source.label(), target.label())
    }

    pub fn slug(&self) -> String {
        let (source, target) = self.systems();
        format!("{}-{}", source.slug(), target.slug())
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Transformation::ALL[0]
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Transformation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Transformation::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted) || t.slug().eq_ignore_ascii_case(wanted))
            .ok_or(TransformError::UnknownTransformation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_menu_entries() {
        let labels: Vec<String> = Transformation::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec![
                "WGS 84 to Ghana National Grid",
                "WGS 84 to Ghana Meter Grid",
                "Ghana National Grid to WGS 84",
                "Ghana Meter Grid to WGS 84",
            ]
        );
    }

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!(
            "WGS 84 to Ghana Meter Grid".parse::<Transformation>(),
            Ok(Transformation::Wgs84ToGhanaMetreGrid)
        );
        assert_eq!(
            "  ghana national grid to wgs 84 ".parse::<Transformation>(),
            Ok(Transformation::GhanaNationalGridToWgs84)
        );
        assert_eq!("gmg-wgs84".parse::<Transformation>(), Ok(Transformation::GhanaMetreGridToWgs84));
    }

    #[test]
    fn rejects_anything_outside_the_set() {
        for raw in ["", "WGS 84 to WGS 84", "UTM 30N to WGS 84", "wgs84-utm"] {
            assert_eq!(raw.parse::<Transformation>(), Err(TransformError::UnknownTransformation));
        }
    }

    #[test]
    fn inverse_swaps_the_pair() {
        for t in Transformation::ALL {
            let (source, target) = t.systems();
            assert_eq!(t.inverse().systems(), (target, source));
            assert_eq!(t.inverse().inverse(), t);
        }
    }

    #[test]
    fn default_is_first_menu_entry() {
        assert_eq!(Transformation::default(), Transformation::Wgs84ToGhanaNationalGrid);
    }
}
