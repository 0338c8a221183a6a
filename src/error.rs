//! Error types for geocat
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in geocat
#[derive(Debug, Error)]
pub enum GeocatError {
    /// Bundled or overridden dataset could not be read or parsed
    #[error("Data error: {0}")]
    Data(String),

    /// Form submission rejected or network failure
    #[error("Submission failed: {0}")]
    Submission(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for geocat operations
pub type Result<T> = std::result::Result<T, GeocatError>;
