//! Log severity levels and console colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity, ordered `Debug < Info < Warning < Error < Critical`.
///
/// A logger drops every record below its configured threshold level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail for developers
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected but recoverable
    Warning,
    /// An operation failed
    Error,
    /// The application cannot continue
    Critical,
}

impl LogLevel {
    /// Upper-case level name as it appears in formatted records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ANSI SGR foreground colors usable for console echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogColor {
    /// Terminal default foreground
    Default,
    /// Red (SGR 31)
    Red,
    /// Green (SGR 32)
    Green,
    /// Yellow (SGR 33)
    Yellow,
    /// Blue (SGR 34)
    Blue,
    /// Magenta (SGR 35)
    Magenta,
    /// Cyan (SGR 36)
    Cyan,
    /// White (SGR 37)
    White,
}

impl LogColor {
    /// The SGR parameter for this color (`0` resets to the default).
    #[must_use]
    pub fn sgr_code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Critical.as_str(), "CRITICAL");
    }

    #[test]
    fn test_sgr_codes() {
        assert_eq!(LogColor::Red.sgr_code(), 31);
        assert_eq!(LogColor::Default.sgr_code(), 0);
    }
}
