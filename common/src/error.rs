use thiserror::Error;

/// Why a transform request produced no coordinate.
///
/// The display text of each variant is exactly what the user is shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Please enter both coordinates.")]
    MissingCoordinate,
    #[error("Invalid input. Please enter numeric values.")]
    InvalidNumber,
    #[error("Invalid transformation type selected.")]
    UnknownTransformation,
    /// Raised by the projection library; its text is kept verbatim.
    #[error("{0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No valid result to save.")]
    NothingToSave,
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
