use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads vendor documents, aggregates parts, or emits the XML feed.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading inputs or writing the feed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when an input file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a file is valid JSON but not a vehicle document.
    #[error("{path}: not in expected format ({reason})")]
    InvalidShape { path: PathBuf, reason: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input folder not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
