use std::fs;

use ghcoord_common::error::SaveError;
use ghcoord_core::form::{ERROR_MARKER, Form, SaveOutcome};
use ghcoord_core::service::TransformationService;

#[test]
fn save_without_result_leaves_existing_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    fs::write(&path, "previous").unwrap();

    let mut form = Form::new(TransformationService::standard());
    let err = form.save(&path).unwrap_err();

    assert!(matches!(err, SaveError::NothingToSave));
    assert_eq!(form.output().x, ERROR_MARKER);
    assert_eq!(form.output().y, "No valid result to save.");
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
}

#[test]
fn failed_transform_discards_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");

    let mut form = Form::new(TransformationService::standard());
    assert!(form.transform("-1.5", "5.5", "WGS 84 to Ghana Meter Grid").is_success());
    assert!(!form.transform("-1.5", "", "WGS 84 to Ghana Meter Grid").is_success());

    assert!(matches!(form.save(&path), Err(SaveError::NothingToSave)));
    assert!(!path.exists());
}

#[test]
fn saved_report_matches_output_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");

    let mut form = Form::new(TransformationService::standard());
    form.transform("-0.1870", "5.6037", "WGS 84 to Ghana National Grid");
    let expected = format!(
        "Transformed Coordinates:\nX: {}\nY: {}",
        form.output().x,
        form.output().y
    );

    assert_eq!(form.save(&path).unwrap(), SaveOutcome::Saved(path.clone()));
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}
