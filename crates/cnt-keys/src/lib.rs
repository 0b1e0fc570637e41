//! cnt-keys - Keyed XOR obfuscation registry.
//!
//! Stores named obfuscation keys with per-key metadata (author, license,
//! version, creation time) and applies a repeating-key XOR transform to
//! caller data. The transform is obfuscation, not encryption: it hides
//! content from casual inspection and nothing more.
//!
//! The registry is a plain value owned by its caller. There is no global
//! instance; pass a [`KeyRegistry`] to whatever needs one.
//!
//! # Example
//!
//! ```rust
//! use cnt_keys::{generate_key_data, KeyRegistry, MIN_KEY_LENGTH};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = KeyRegistry::new();
//! registry.create_key("demo", "cnt", "MIT", "1", generate_key_data(MIN_KEY_LENGTH))?;
//!
//! let obscured = registry.encrypt("demo", b"not a secret")?;
//! assert_eq!(registry.decrypt("demo", &obscured)?, b"not a secret");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod registry;

// Re-export commonly used types
pub use error::{KeyError, Result};
pub use registry::{generate_key_data, KeyMeta, KeyRegistry, MIN_KEY_LENGTH};
