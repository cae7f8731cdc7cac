use std::sync::Arc;

use approx::assert_abs_diff_eq;
use ghcoord_common::crs::{CrsDefinition, CrsRegistry};
use ghcoord_common::error::TransformError;
use ghcoord_common::geo::{Coordinate, ReferenceSystem, Transformation, TransformationResult};
use ghcoord_core::service::TransformationService;
use ghcoord_integration_tests::{DEGREE_TOLERANCE, GRID_TOLERANCE, ghana_points};

fn success(result: TransformationResult) -> Coordinate {
    match result {
        TransformationResult::Success(coordinate) => coordinate,
        TransformationResult::Failure(err) => panic!("transform failed: {err}"),
    }
}

#[test]
fn wgs84_to_national_grid_produces_new_finite_values() {
    let service = TransformationService::standard();

    let result = service.transform("-1.5", "5.5", "WGS 84 to Ghana National Grid");
    let grid = success(result);

    assert!(grid.is_finite());
    assert_ne!(grid.x, -1.5);
    assert_ne!(grid.y, 5.5);
}

#[test]
fn round_trip_from_wgs84_returns_the_input() {
    let service = TransformationService::standard();

    for forward in [Transformation::Wgs84ToGhanaNationalGrid, Transformation::Wgs84ToGhanaMetreGrid] {
        for point in ghana_points() {
            let grid = success(service.transform_coordinate(point, forward));
            let back = success(service.transform_coordinate(grid, forward.inverse()));

            assert_abs_diff_eq!(back.x, point.x, epsilon = DEGREE_TOLERANCE);
            assert_abs_diff_eq!(back.y, point.y, epsilon = DEGREE_TOLERANCE);
        }
    }
}

#[test]
fn round_trip_from_grids_returns_the_input() {
    let service = TransformationService::standard();

    for forward in [Transformation::GhanaNationalGridToWgs84, Transformation::GhanaMetreGridToWgs84] {
        for point in ghana_points() {
            // start from a grid coordinate that lies inside Ghana
            let grid = success(service.transform_coordinate(point, forward.inverse()));

            let geographic = success(service.transform_coordinate(grid, forward));
            let back = success(service.transform_coordinate(geographic, forward.inverse()));

            assert_abs_diff_eq!(back.x, grid.x, epsilon = GRID_TOLERANCE);
            assert_abs_diff_eq!(back.y, grid.y, epsilon = GRID_TOLERANCE);
        }
    }
}

#[test]
fn the_two_grids_disagree() {
    let service = TransformationService::standard();
    let accra = Coordinate::new(-0.1870, 5.6037);

    let national = success(service.transform_coordinate(accra, Transformation::Wgs84ToGhanaNationalGrid));
    let metre = success(service.transform_coordinate(accra, Transformation::Wgs84ToGhanaMetreGrid));

    assert!((national.x - metre.x).abs() > 1.0);
    assert!((national.y - metre.y).abs() > 1.0);
}

#[test]
fn invalid_latitude_is_reported_not_raised() {
    let service = TransformationService::standard();

    for selector in ["WGS 84 to Ghana National Grid", "WGS 84 to Ghana Meter Grid"] {
        let result = service.transform("-1.5", "95.0", selector);

        match result {
            TransformationResult::Failure(TransformError::Provider(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected a provider failure, got {other:?}"),
        }
    }
}

#[test]
fn validation_messages_match_the_form_texts() {
    let service = TransformationService::standard();

    let cases = [
        (("", "5.0", "WGS 84 to Ghana National Grid"), "Please enter both coordinates."),
        (("abc", "5.0", "WGS 84 to Ghana National Grid"), "Invalid input. Please enter numeric values."),
        (("-1.5", "5.5", "WGS 84 to Ghana Grid"), "Invalid transformation type selected."),
    ];

    for ((x, y, selector), expected) in cases {
        assert_eq!(
            service.transform(x, y, selector).failure_message().as_deref(),
            Some(expected)
        );
    }
}

#[test]
fn broken_definition_surfaces_library_text() {
    let broken = CrsDefinition::new(
        ReferenceSystem::GhanaMetreGrid,
        25000,
        "Leigon / Ghana Metre Grid",
        "+proj=not_a_projection",
        false,
    );
    let registry = Arc::new(CrsRegistry::standard().with_definition(broken));
    let service = TransformationService::with_registry(registry);

    match service.transform("-1.5", "5.5", "WGS 84 to Ghana Meter Grid") {
        TransformationResult::Failure(TransformError::Provider(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected a provider failure, got {other:?}"),
    }

    // the other grid is unaffected
    assert!(service.transform("-1.5", "5.5", "WGS 84 to Ghana National Grid").is_success());
}
