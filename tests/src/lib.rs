//! Shared fixtures for the workspace integration tests.

use ghcoord_common::geo::Coordinate;

/// Points inside Ghana, as WGS 84 longitude/latitude.
pub const GHANA_POINTS: [(f64, f64); 4] = [
    (-0.1870, 5.6037),  // Accra
    (-1.6244, 6.6885),  // Kumasi
    (-0.8393, 9.4034),  // Tamale
    (-1.7554, 4.8845),  // Takoradi
];

pub fn ghana_points() -> impl Iterator<Item = Coordinate> {
    GHANA_POINTS.into_iter().map(Coordinate::from)
}

// Both grids carry a 3-parameter shift to WGS 84. Transforms are 2D, so the
// ellipsoidal height produced by the geocentric shift is dropped after each
// call and a forward/inverse pair closes only to about 2e-3 ft/m (1.3e-8 deg).

/// Tolerance for round trips ending in degrees.
pub const DEGREE_TOLERANCE: f64 = 1e-7;

/// Tolerance for round trips ending in feet or metres.
pub const GRID_TOLERANCE: f64 = 5e-3;
