//! # Result Report
//!
//! The human-readable text file produced by the save action. It is not an
//! interchange format and is never read back.

use crate::geo::Coordinate;

pub const REPORT_TITLE: &str = "Transformed Coordinates:";

/// Extension appended to save paths that have none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Renders the report body. There is no trailing newline.
pub fn render(coordinate: &Coordinate) -> String {
    format!(
        "{}\nX: {}\nY: {}",
        REPORT_TITLE,
        coordinate.formatted_x(),
        coordinate.formatted_y()
    )
}
