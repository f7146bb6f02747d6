//! Error types for the validation crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading validation inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Measurement or tolerance file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Tolerance value is negative or not finite.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Measurement entry is unusable.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
