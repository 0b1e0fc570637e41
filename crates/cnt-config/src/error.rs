//! Error types for the configuration store.

use thiserror::Error;

/// Errors that can occur during configuration store operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filename extension is neither `.cntconfig` nor `.cntconfigbin`.
    #[error("unsupported config file extension: {path}")]
    UnsupportedExtension {
        /// The offending file path
        path: String,
    },

    /// The file given to the loading constructor could not be used,
    /// whatever the underlying reason.
    #[error("invalid config file: {path}")]
    InvalidFile {
        /// The file path handed to the constructor
        path: String,
    },

    /// Binary stream ended in the middle of a record.
    #[error("malformed binary record: stream truncated while reading {context}")]
    MalformedBinary {
        /// Which part of the record the stream ended in
        context: &'static str,
    },

    /// Strict lookup by name found no matching entry.
    #[error("key not found: {name}")]
    KeyNotFound {
        /// The name that was looked up
        name: String,
    },

    /// Positional access beyond the end of the entry sequence.
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the store
        len: usize,
    },

    /// Failed to determine the default config directory path.
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// I/O error reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::KeyNotFound {
            name: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "key not found: missing");

        let err = ConfigError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for 3 entries");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
