//! Error types for storm track handling.

use thiserror::Error;

/// Result type alias using StormError.
pub type StormResult<T> = Result<T, StormError>;

/// Errors raised while reading storm track data.
///
/// Geometry generation itself never fails; these only surface at the input
/// boundary where raw GeoJSON is turned into [`crate::Storm`] values.
#[derive(Debug, Error)]
pub enum StormError {
    // === Document Errors ===
    #[error("Invalid storm JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected GeoJSON type '{expected}', found '{found}'")]
    UnexpectedType { expected: &'static str, found: String },

    // === Feature Errors ===
    #[error("Malformed storm feature: {0}")]
    MalformedFeature(#[source] serde_json::Error),

    #[error("Storm '{0}' has an empty track")]
    EmptyTrack(String),

    #[error("Invalid coordinate at track index {index}: {message}")]
    InvalidCoordinate { index: usize, message: String },
}

impl StormError {
    /// Whether the error concerns a single feature rather than the document.
    ///
    /// Collection parsing skips features that fail with a feature-level error.
    pub fn is_feature_level(&self) -> bool {
        matches!(
            self,
            StormError::MalformedFeature(_)
                | StormError::EmptyTrack(_)
                | StormError::InvalidCoordinate { .. }
                | StormError::UnexpectedType { expected: "LineString", .. }
                | StormError::UnexpectedType { expected: "Feature", .. }
        )
    }
}
