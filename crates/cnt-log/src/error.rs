//! Error types for the logger.

use thiserror::Error;

/// Errors that can occur while configuring a logger.
///
/// Emitting a record never fails; file echo is best-effort by design.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        /// The requested log file path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for logger configuration.
pub type Result<T> = std::result::Result<T, LogError>;
