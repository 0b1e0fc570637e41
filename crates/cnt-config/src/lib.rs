//! cnt-config - Flat name/value configuration store.
//!
//! An ordered collection of `name=value` string pairs backed by two on-disk
//! formats selected by file extension: a `#`-commented text format
//! (`.cntconfig`) and a length-prefixed, XOR-obscured binary format
//! (`.cntconfigbin`).
//!
//! # Modules
//!
//! - [`error`] - Error types using thiserror
//! - [`store`] - The [`ConfigStore`] collection and both file formats
//! - [`binary`] - The binary record codec and obfuscation pass
//!
//! # Example
//!
//! ```rust
//! use cnt_config::ConfigStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ConfigStore::new();
//! config.add("host", "localhost");
//! config.add("port", "8080");
//!
//! // first-match lookup; duplicates are allowed
//! assert_eq!(config.get_value("host"), "localhost");
//!
//! // auto-vivifying access creates missing entries
//! *config.entry("theme") = "dark".to_string();
//! assert_eq!(config.value("theme")?, "dark");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod binary;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use store::{ConfigEntry, ConfigStore, BINARY_EXTENSION, TEXT_EXTENSION};
