use std::fmt;

/// Number of decimals used whenever a coordinate is shown or written out.
pub const DISPLAY_PRECISION: usize = 6;

/// An ordered `(x, y)` pair.
///
/// `x` is longitude or easting and `y` is latitude or northing, depending on
/// the reference system the pair is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn formatted_x(&self) -> String {
        format!("{:.*}", DISPLAY_PRECISION, self.x)
    }

    pub fn formatted_y(&self) -> String {
        format!("{:.*}", DISPLAY_PRECISION, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.formatted_x(), self.formatted_y())
    }
}
