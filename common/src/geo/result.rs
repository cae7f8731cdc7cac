use crate::error::TransformError;
use crate::geo::coordinate::Coordinate;

/// Outcome of one transform request.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationResult {
    Success(Coordinate),
    Failure(TransformError),
}

impl TransformationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TransformationResult::Success(_))
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            TransformationResult::Success(coordinate) => Some(*coordinate),
            TransformationResult::Failure(_) => None,
        }
    }

    /// Reason text of a failure.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            TransformationResult::Success(_) => None,
            TransformationResult::Failure(err) => Some(err.to_string()),
        }
    }
}

impl From<Result<Coordinate, TransformError>> for TransformationResult {
    fn from(result: Result<Coordinate, TransformError>) -> Self {
        match result {
            Ok(coordinate) => TransformationResult::Success(coordinate),
            Err(err) => TransformationResult::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_is_the_error_text() {
        let result = TransformationResult::Failure(TransformError::MissingCoordinate);
        assert!(!result.is_success());
        assert_eq!(result.coordinate(), None);
        assert_eq!(result.failure_message().as_deref(), Some("Please enter both coordinates."));
    }

    #[test]
    fn provider_text_is_not_rewritten() {
        let result: TransformationResult =
            Err(TransformError::Provider("Latitude out of range".to_string())).into();
        assert_eq!(result.failure_message().as_deref(), Some("Latitude out of range"));
    }

    #[test]
    fn success_carries_coordinate() {
        let result: TransformationResult = Ok(Coordinate::new(1.5, -2.5)).into();
        assert!(result.is_success());
        assert_eq!(result.coordinate(), Some(Coordinate::new(1.5, -2.5)));
        assert_eq!(result.failure_message(), None);
    }
}
