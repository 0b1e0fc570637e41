//! Ordered name/value configuration store with text and binary file formats.
//!
//! The store is a flat sequence of [`ConfigEntry`] pairs. Insertion order is
//! preserved, drives text-format serialization, and defines "first match"
//! lookup semantics. Duplicate names are allowed.
//!
//! Two on-disk formats are supported, selected by file extension:
//!
//! - `.cntconfig` — `name=value` text lines with `#` comments
//! - `.cntconfigbin` — length-prefixed records under a fixed XOR pass
//!   (see the [`binary`](crate::binary) module)
//!
//! The store is single-owner and single-threaded; callers needing shared
//! access must supply their own synchronization.

use crate::binary;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extension for the text format.
pub const TEXT_EXTENSION: &str = "cntconfig";

/// File extension for the obfuscated binary format.
pub const BINARY_EXTENSION: &str = "cntconfigbin";

/// A single name/value configuration pair.
///
/// Equality is structural: two entries are equal when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Entry name (lookup key; not required to be unique)
    pub name: String,
    /// Entry value
    pub value: String,
}

impl ConfigEntry {
    /// Create an entry from a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// An ordered collection of configuration entries tied to an optional file path.
///
/// The path records where the store was last loaded from or saved to; it is
/// only updated on successful I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: Vec<ConfigEntry>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an empty store with no associated path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store by loading the given file.
    ///
    /// The format is chosen from the file extension as in [`load_file`].
    ///
    /// # Errors
    /// Any failure (unreadable file, bad extension, malformed content) is
    /// collapsed into [`ConfigError::InvalidFile`].
    ///
    /// [`load_file`]: ConfigStore::load_file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut store = Self::new();
        store.load_file(path).map_err(|err| {
            tracing::warn!("failed to open config file {}: {err}", path.display());
            ConfigError::InvalidFile {
                path: path.display().to_string(),
            }
        })?;
        Ok(store)
    }

    /// Default location for an application config file:
    /// `<XDG config dir>/cnt/default.cntconfig`.
    ///
    /// # Errors
    /// Returns [`ConfigError::NoConfigDir`] if the platform config directory
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "aplcexenicesetrl", "cnt")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("default.cntconfig"))
    }

    /// Load a file, dispatching on its extension.
    ///
    /// `.cntconfig` loads as text, `.cntconfigbin` as binary. No content is
    /// read for any other extension.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for unrecognized
    /// extensions, plus whatever the selected format loader can return.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match file_extension(path) {
            Some(TEXT_EXTENSION) => self.load_text(path),
            Some(BINARY_EXTENSION) => self.load_binary(path),
            _ => Err(unsupported(path)),
        }
    }

    /// Save to a file, dispatching on its extension as in [`load_file`].
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for unrecognized
    /// extensions, or [`ConfigError::Io`] if the file cannot be written.
    ///
    /// [`load_file`]: ConfigStore::load_file
    pub fn save_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match file_extension(path) {
            Some(TEXT_EXTENSION) => self.save_text(path),
            Some(BINARY_EXTENSION) => self.save_binary(path),
            _ => Err(unsupported(path)),
        }
    }

    /// Load entries from a `.cntconfig` text file.
    ///
    /// Lines are trimmed of leading/trailing spaces and tabs. Blank lines and
    /// lines starting with `#` are skipped. Remaining lines split on the
    /// first `=`; lines without one (or with an empty name) are discarded.
    /// Parsed entries are appended after any entries already in the store,
    /// in file order, duplicates included.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for a non-`.cntconfig`
    /// path, or [`ConfigError::Io`] if the file cannot be read.
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if file_extension(path) != Some(TEXT_EXTENSION) {
            return Err(unsupported(path));
        }

        let reader = BufReader::new(File::open(path)?);
        let mut appended = 0usize;
        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = parse_line(&line) {
                self.entries.push(entry);
                appended += 1;
            }
        }

        tracing::debug!("loaded {appended} entries from {}", path.display());
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save entries to a `.cntconfig` text file, one `name=value` line per
    /// entry in sequence order.
    ///
    /// No escaping is performed: a value whose trimmed form starts with `#`,
    /// or a name containing `=`, will not survive a reload intact. That
    /// matches the on-disk format as deployed; do not store such values.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for a non-`.cntconfig`
    /// path, or [`ConfigError::Io`] if the file cannot be written.
    pub fn save_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if file_extension(path) != Some(TEXT_EXTENSION) {
            return Err(unsupported(path));
        }

        let mut writer = BufWriter::new(File::create(path)?);
        for entry in &self.entries {
            writeln!(writer, "{}={}", entry.name, entry.value)?;
        }
        writer.flush()?;

        tracing::debug!("saved {} entries to {}", self.entries.len(), path.display());
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load entries from a `.cntconfigbin` binary file, replacing the current
    /// entries on success.
    ///
    /// On failure the in-memory entries are left untouched.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for a non-`.cntconfigbin`
    /// path, [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::MalformedBinary`] if the stream ends mid-record.
    pub fn load_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if file_extension(path) != Some(BINARY_EXTENSION) {
            return Err(unsupported(path));
        }

        let mut data = fs::read(path)?;
        binary::obfuscate(&mut data);
        let entries = binary::decode_records(&data)?;

        tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
        self.entries = entries;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save entries to a `.cntconfigbin` binary file.
    ///
    /// The record stream is passed through the fixed XOR obfuscation before
    /// writing. This is not encryption; see the [`binary`](crate::binary)
    /// module documentation.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedExtension`] for a non-`.cntconfigbin`
    /// path, or [`ConfigError::Io`] if the file cannot be written.
    pub fn save_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if file_extension(path) != Some(BINARY_EXTENSION) {
            return Err(unsupported(path));
        }

        let mut data = binary::encode_records(&self.entries);
        binary::obfuscate(&mut data);
        fs::write(path, &data)?;

        tracing::debug!("saved {} entries to {}", self.entries.len(), path.display());
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Path this store was last successfully loaded from or saved to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append an entry unconditionally. Duplicate names are allowed.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ConfigEntry::new(name, value));
    }

    /// Append an already-built entry unconditionally.
    pub fn add_entry(&mut self, entry: ConfigEntry) {
        self.entries.push(entry);
    }

    /// Mutable access to the value of the first entry named `name`, creating
    /// an empty-valued entry at the end of the sequence if none exists.
    ///
    /// This accessor never fails; use [`value`](ConfigStore::value) for a
    /// strict read-only lookup.
    pub fn entry(&mut self, name: &str) -> &mut String {
        if let Some(index) = self.entries.iter().position(|e| e.name == name) {
            return &mut self.entries[index].value;
        }
        let index = self.entries.len();
        self.entries.push(ConfigEntry::new(name, ""));
        &mut self.entries[index].value
    }

    /// Value of the first entry named `name`.
    ///
    /// # Errors
    /// Returns [`ConfigError::KeyNotFound`] if no entry has that name.
    pub fn value(&self, name: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
            .ok_or_else(|| ConfigError::KeyNotFound {
                name: name.to_string(),
            })
    }

    /// Value of the first entry named `name`, or `""` if none — the lenient
    /// counterpart of [`value`](ConfigStore::value).
    #[must_use]
    pub fn get_value(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or("", |e| e.value.as_str())
    }

    /// Name of the first entry whose value equals `value`, or `""` if none.
    #[must_use]
    pub fn get_name(&self, value: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map_or("", |e| e.name.as_str())
    }

    /// Entry at `index`.
    ///
    /// # Errors
    /// Returns [`ConfigError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&ConfigEntry> {
        self.entries.get(index).ok_or(ConfigError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Mutable entry at `index`.
    ///
    /// # Errors
    /// Returns [`ConfigError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut ConfigEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(ConfigError::IndexOutOfRange { index, len })
    }

    /// Whether any entry has the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Remove every entry named `name`, preserving the order of the rest.
    /// Returns whether anything was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    /// Remove every entry whose value equals `value`, preserving the order
    /// of the rest. Returns whether anything was removed.
    pub fn remove_by_value(&mut self, value: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.value != value);
        self.entries.len() != before
    }

    /// Remove exactly the entry at `index`. Returns `false` (and does
    /// nothing) if `index` is out of range.
    pub fn remove_by_index(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigEntry> {
        self.entries.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = &'a ConfigEntry;
    type IntoIter = std::slice::Iter<'a, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ConfigStore {
    type Item = ConfigEntry;
    type IntoIter = std::vec::IntoIter<ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<ConfigEntry> for ConfigStore {
    fn extend<T: IntoIterator<Item = ConfigEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn unsupported(path: &Path) -> ConfigError {
    ConfigError::UnsupportedExtension {
        path: path.display().to_string(),
    }
}

/// Parse one text-format line. Returns `None` for comments, blank lines,
/// lines without `=`, and lines whose trimmed name is empty.
fn parse_line(line: &str) -> Option<ConfigEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let trimmed = trim(line);
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (name, value) = trimmed.split_once('=')?;
    let name = trim(name);
    if name.is_empty() {
        return None;
    }
    Some(ConfigEntry::new(name, trim(value)))
}

/// Trim leading/trailing spaces and tabs only, per the text format contract.
fn trim(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}
