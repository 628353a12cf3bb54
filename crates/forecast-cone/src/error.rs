//! Forecast cone output errors.

use thiserror::Error;

/// Result type alias using ConeError.
pub type ConeResult<T> = Result<T, ConeError>;

/// Errors raised while writing cone layers.
///
/// Zone generation is infallible; only serialisation and I/O can fail.
#[derive(Debug, Error)]
pub enum ConeError {
    #[error("Failed to serialize cone layer: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write cone layer: {0}")]
    Io(#[from] std::io::Error),
}
