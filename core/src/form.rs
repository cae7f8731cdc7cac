//! # Conversion Form
//!
//! The state behind the user interface: two output fields and the single
//! "current" result that a later save action consumes.

use std::fs;
use std::path::PathBuf;

use ghcoord_common::error::SaveError;
use ghcoord_common::geo::{Coordinate, TransformationResult};
use ghcoord_common::report;
use tracing::{debug, info};

use crate::service::TransformationService;

/// Shown in the X field whenever the Y field carries a failure message.
pub const ERROR_MARKER: &str = "Error";
pub const SAVED_MARKER: &str = "Saved";
pub const SAVED_MESSAGE: &str = "Result saved successfully.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFields {
    pub x: String,
    pub y: String,
}

impl OutputFields {
    fn set(&mut self, x: &str, y: &str) {
        self.x = x.to_string();
        self.y = y.to_string();
    }

    pub fn is_error(&self) -> bool {
        self.x == ERROR_MARKER
    }
}

/// Asks where a report should go, like a "save as" dialog.
pub trait SaveTarget {
    /// `None` means the user cancelled.
    fn choose_path(&self) -> Option<PathBuf>;
}

impl SaveTarget for PathBuf {
    fn choose_path(&self) -> Option<PathBuf> {
        Some(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

pub struct Form {
    service: TransformationService,
    output: OutputFields,
    held: Option<Coordinate>,
}

impl Form {
    pub fn new(service: TransformationService) -> Self {
        Self {
            service,
            output: OutputFields::default(),
            held: None,
        }
    }

    pub fn output(&self) -> &OutputFields {
        &self.output
    }

    /// The result a save action would write.
    pub fn held(&self) -> Option<Coordinate> {
        self.held
    }

    /// Runs one transform and renders it into the output fields.
    pub fn transform(&mut self, raw_x: &str, raw_y: &str, selector: &str) -> TransformationResult {
        let result = self.service.transform(raw_x, raw_y, selector);

        match &result {
            TransformationResult::Success(coordinate) => self.display_result(*coordinate),
            TransformationResult::Failure(err) => self.display_error(&err.to_string()),
        }
        result
    }

    /// Writes the held result as a report and consumes it.
    ///
    /// Without a held result no path is requested and no file is touched.
    pub fn save(&mut self, target: &dyn SaveTarget) -> Result<SaveOutcome, SaveError> {
        let Some(coordinate) = self.held else {
            let err = SaveError::NothingToSave;
            self.display_error(&err.to_string());
            return Err(err);
        };

        let Some(path) = target.choose_path() else {
            debug!("save cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        let path = with_default_extension(path);

        if let Err(err) = fs::write(&path, report::render(&coordinate)) {
            let err = SaveError::from(err);
            // the result stays held so the save can be retried elsewhere
            self.output.set(ERROR_MARKER, &err.to_string());
            return Err(err);
        }

        info!("Report written to {}", path.display());
        self.held = None;
        self.output.set(SAVED_MARKER, SAVED_MESSAGE);
        Ok(SaveOutcome::Saved(path))
    }

    /// Empties the fields and drops the held result.
    pub fn clear(&mut self) {
        self.output = OutputFields::default();
        self.held = None;
    }

    fn display_result(&mut self, coordinate: Coordinate) {
        self.output.set(&coordinate.formatted_x(), &coordinate.formatted_y());
        self.held = Some(coordinate);
    }

    fn display_error(&mut self, msg: &str) {
        self.output.set(ERROR_MARKER, msg);
        self.held = None;
    }
}

fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(report::DEFAULT_EXTENSION);
    }
    path
}
