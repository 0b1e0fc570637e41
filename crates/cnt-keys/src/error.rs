//! Error types for the key registry.

use thiserror::Error;

/// Errors that can occur during key registry operations.
#[derive(Debug, Error)]
pub enum KeyError {
    /// No key is registered under the given id.
    #[error("key not found: {id}")]
    NotFound {
        /// The requested key id
        id: String,
    },

    /// Key material is shorter than the registry minimum.
    #[error("key length {len} below minimum of {min} bytes")]
    KeyTooShort {
        /// Length of the rejected key material
        len: usize,
        /// The registry's minimum key length
        min: usize,
    },
}

/// Result type alias for key registry operations.
pub type Result<T> = std::result::Result<T, KeyError>;
