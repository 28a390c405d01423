/// Core error types for Mixtape
use thiserror::Error;

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for Mixtape
///
/// Validation of individual change requests never produces one of these;
/// a bad request is logged and skipped by the engine.
#[derive(Error, Debug)]
pub enum MixtapeError {
    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
