//! The logger itself: level filtering, template rendering, and the two
//! echo targets (console, append-mode file).

use crate::error::{LogError, Result};
use crate::level::{LogColor, LogLevel};
use chrono::Local;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Default record template.
pub const DEFAULT_FORMAT: &str = "[{timestamp}] - {name} - {level} - {message}";

/// Timestamp layout used for the `{timestamp}` placeholder (local time).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A named, leveled logger.
///
/// Records at or above the threshold level are rendered through the template
/// (placeholders `{timestamp}`, `{name}`, `{level}`, `{message}`) and echoed
/// to the console, wrapped in the level's ANSI color when color is enabled,
/// and to the log file if one is attached.
///
/// Messages arrive already formatted; callers use `format!` for interpolation:
///
/// ```rust
/// use cnt_log::{Logger, LogLevel};
///
/// let mut log = Logger::new("boot").with_level(LogLevel::Debug);
/// log.info(format!("loaded {} entries", 3));
/// ```
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: LogLevel,
    format: String,
    use_color: bool,
    level_colors: BTreeMap<LogLevel, LogColor>,
    file: Option<File>,
}

impl Logger {
    /// Create a logger with the given name, an `Info` threshold, the default
    /// template, color enabled, and no file echo.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut level_colors = BTreeMap::new();
        level_colors.insert(LogLevel::Debug, LogColor::Cyan);
        level_colors.insert(LogLevel::Info, LogColor::Green);
        level_colors.insert(LogLevel::Warning, LogColor::Yellow);
        level_colors.insert(LogLevel::Error, LogColor::Red);
        level_colors.insert(LogLevel::Critical, LogColor::Magenta);

        Self {
            name: name.into(),
            level: LogLevel::Info,
            format: DEFAULT_FORMAT.to_string(),
            use_color: true,
            level_colors,
            file: None,
        }
    }

    /// Set the threshold level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the record template.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Enable or disable colorized console echo.
    #[must_use]
    pub fn with_color(mut self, enable: bool) -> Self {
        self.use_color = enable;
        self
    }

    /// Override the console color for one level.
    #[must_use]
    pub fn with_level_color(mut self, level: LogLevel, color: LogColor) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// Attach an append-mode log file, replacing any previous one.
    ///
    /// # Errors
    /// Returns [`LogError::OpenFile`] if the file cannot be opened.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::OpenFile {
                path: path.display().to_string(),
                source,
            })?;
        self.file = Some(file);
        Ok(self)
    }

    /// Change the threshold level on an existing logger.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Current record template.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Log at `Debug`.
    pub fn debug(&mut self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at `Info`.
    pub fn info(&mut self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    /// Log at `Warning`.
    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log at `Error`.
    pub fn error(&mut self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at `Critical`.
    pub fn critical(&mut self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }

    /// Log a record at an explicit level. Records below the threshold are
    /// dropped before any formatting work.
    pub fn log(&mut self, level: LogLevel, message: impl AsRef<str>) {
        if level < self.level {
            return;
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = render(&self.format, &timestamp, &self.name, level, message.as_ref());

        if self.use_color {
            let color = self
                .level_colors
                .get(&level)
                .copied()
                .unwrap_or(LogColor::Default);
            println!("\x1b[{}m{line}\x1b[0m", color.sgr_code());
        } else {
            println!("{line}");
        }

        // File echo is best-effort; a full disk must not take the logger down.
        if let Some(file) = &mut self.file {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    }
}

/// Substitute the `{timestamp}`, `{name}`, `{level}`, and `{message}`
/// placeholders in a record template.
fn render(template: &str, timestamp: &str, name: &str, level: LogLevel, message: &str) -> String {
    template
        .replace("{timestamp}", timestamp)
        .replace("{name}", name)
        .replace("{level}", level.as_str())
        .replace("{message}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let line = render(
            DEFAULT_FORMAT,
            "2025-01-01 00:00:00",
            "root",
            LogLevel::Warning,
            "disk almost full",
        );
        assert_eq!(
            line,
            "[2025-01-01 00:00:00] - root - WARNING - disk almost full"
        );
    }

    #[test]
    fn test_render_custom_template() {
        let line = render("{level}: {message}", "ts", "n", LogLevel::Error, "boom");
        assert_eq!(line, "ERROR: boom");
    }

    #[test]
    fn test_threshold_filters_file_echo() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("app.log");

        let mut log = Logger::new("test")
            .with_level(LogLevel::Warning)
            .with_color(false)
            .with_file(&path)
            .expect("open log file");

        log.info("below threshold");
        log.error("kept");

        let contents = fs::read_to_string(&path).expect("read log file");
        assert!(!contents.contains("below threshold"));
        assert!(contents.contains("ERROR - kept"));
    }

    #[test]
    fn test_file_echo_appends() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("app.log");

        for message in ["first", "second"] {
            let mut log = Logger::new("test")
                .with_color(false)
                .with_file(&path)
                .expect("open log file");
            log.info(message);
        }

        let contents = fs::read_to_string(&path).expect("read log file");
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_with_file_rejects_bad_path() {
        let err = Logger::new("test")
            .with_file("/nonexistent/dir/app.log")
            .expect_err("unwritable path must fail");
        assert!(matches!(err, LogError::OpenFile { .. }));
    }

    #[test]
    fn test_default_configuration() {
        let log = Logger::new("root");
        assert_eq!(log.name(), "root");
        assert_eq!(log.level(), LogLevel::Info);
        assert_eq!(log.format(), DEFAULT_FORMAT);
    }
}
