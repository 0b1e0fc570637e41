//! cnt-log - Leveled console/file logger.
//!
//! A small logging sink: records carry a level (`Debug` through `Critical`),
//! pass through a `{timestamp}`/`{name}`/`{level}`/`{message}` template, and
//! are echoed to the console (optionally ANSI-colorized per level) and to an
//! optional append-mode file.
//!
//! # Example
//!
//! ```rust
//! use cnt_log::{Logger, LogLevel, LogColor};
//!
//! let mut log = Logger::new("app")
//!     .with_level(LogLevel::Debug)
//!     .with_level_color(LogLevel::Debug, LogColor::Blue);
//!
//! log.debug("starting up");
//! log.info(format!("listening on port {}", 8080));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod level;
pub mod logger;

// Re-export commonly used types
pub use error::{LogError, Result};
pub use level::{LogColor, LogLevel};
pub use logger::{Logger, DEFAULT_FORMAT};
