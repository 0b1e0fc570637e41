//! The key registry and its repeating-key XOR transform.
//!
//! The registry is an explicit object owned by its caller; construct one,
//! pass it by reference to whatever needs it, and let it drop when done.
//! There is no process-wide instance.
//!
//! The data transform is a repeating-key XOR. It is involutive (the same
//! call obscures and restores) and provides obfuscation only, no
//! confidentiality. Key bytes are wrapped in [`Zeroizing`] so they are wiped
//! from memory when a key is deleted or the registry drops.

use crate::error::{KeyError, Result};
use chrono::{DateTime, Utc};
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;
use zeroize::Zeroizing;

/// Minimum accepted key length in bytes.
pub const MIN_KEY_LENGTH: usize = 32;

/// Metadata and material for one registered key.
pub struct KeyMeta {
    /// Who issued the key
    pub author: String,
    /// License string the key was issued under
    pub license: String,
    /// Caller-defined key version
    pub version: String,
    /// When the key was created or last rotated
    pub created: DateTime<Utc>,
    key_data: Zeroizing<Vec<u8>>,
}

impl KeyMeta {
    /// Length of the key material in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.key_data.len()
    }
}

// Key bytes stay out of Debug output.
impl fmt::Debug for KeyMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMeta")
            .field("author", &self.author)
            .field("license", &self.license)
            .field("version", &self.version)
            .field("created", &self.created)
            .field("key_len", &self.key_data.len())
            .finish()
    }
}

/// An owned collection of named obfuscation keys.
///
/// Registering a key under an id that already exists replaces the previous
/// key.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    vault: HashMap<String, KeyMeta>,
}

impl KeyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key under `id`, replacing any existing key with that id.
    ///
    /// # Errors
    /// Returns [`KeyError::KeyTooShort`] for key material under
    /// [`MIN_KEY_LENGTH`] bytes.
    pub fn create_key(
        &mut self,
        id: impl Into<String>,
        author: impl Into<String>,
        license: impl Into<String>,
        version: impl Into<String>,
        key_data: Vec<u8>,
    ) -> Result<()> {
        check_length(&key_data)?;
        self.vault.insert(
            id.into(),
            KeyMeta {
                author: author.into(),
                license: license.into(),
                version: version.into(),
                created: Utc::now(),
                key_data: Zeroizing::new(key_data),
            },
        );
        Ok(())
    }

    /// Replace the material of an existing key and refresh its creation time.
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id, or
    /// [`KeyError::KeyTooShort`] for material under [`MIN_KEY_LENGTH`] bytes.
    pub fn update_key(&mut self, id: &str, new_key_data: Vec<u8>) -> Result<()> {
        check_length(&new_key_data)?;
        let meta = self.vault.get_mut(id).ok_or_else(|| not_found(id))?;
        meta.key_data = Zeroizing::new(new_key_data);
        meta.created = Utc::now();
        Ok(())
    }

    /// Remove a key; its material is zeroized on drop.
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id.
    pub fn delete_key(&mut self, id: &str) -> Result<()> {
        self.vault
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Metadata for a registered key.
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&KeyMeta> {
        self.vault.get(id).ok_or_else(|| not_found(id))
    }

    /// Ids of all registered keys, sorted for stable output.
    #[must_use]
    pub fn list_keys(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.vault.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Whether the key under `id` carries the expected license string.
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id.
    pub fn verify_license(&self, id: &str, expected: &str) -> Result<bool> {
        Ok(self.get(id)?.license == expected)
    }

    /// Obscure `data` with the key registered under `id`.
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id.
    pub fn encrypt(&self, id: &str, data: &[u8]) -> Result<Vec<u8>> {
        let key = &self.get(id)?.key_data;
        Ok(data
            .iter()
            .zip(key.iter().cycle())
            .map(|(byte, key_byte)| byte ^ key_byte)
            .collect())
    }

    /// Restore data obscured with the key under `id`. The XOR transform is
    /// involutive, so this is the same operation as
    /// [`encrypt`](KeyRegistry::encrypt).
    ///
    /// # Errors
    /// Returns [`KeyError::NotFound`] for an unknown id.
    pub fn decrypt(&self, id: &str, data: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(id, data)
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vault.len()
    }

    /// Whether the registry holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vault.is_empty()
    }
}

/// Generate random key material of the given length.
#[must_use]
pub fn generate_key_data(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut data);
    data
}

fn check_length(key_data: &[u8]) -> Result<()> {
    if key_data.len() < MIN_KEY_LENGTH {
        return Err(KeyError::KeyTooShort {
            len: key_data.len(),
            min: MIN_KEY_LENGTH,
        });
    }
    Ok(())
}

fn not_found(id: &str) -> KeyError {
    KeyError::NotFound { id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_key(id: &str) -> KeyRegistry {
        let mut registry = KeyRegistry::new();
        registry
            .create_key(id, "cnt", "MIT", "1", generate_key_data(MIN_KEY_LENGTH))
            .expect("register key");
        registry
    }

    #[test]
    fn test_create_rejects_short_keys() {
        let mut registry = KeyRegistry::new();
        let err = registry
            .create_key("short", "cnt", "MIT", "1", vec![0u8; MIN_KEY_LENGTH - 1])
            .expect_err("short key must be rejected");
        assert!(matches!(err, KeyError::KeyTooShort { len: 31, min: 32 }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_transform_roundtrip() {
        let registry = registry_with_key("k1");
        let plaintext = b"flat config data".to_vec();

        let obscured = registry.encrypt("k1", &plaintext).expect("encrypt");
        assert_ne!(obscured, plaintext);
        let restored = registry.decrypt("k1", &obscured).expect("decrypt");
        assert_eq!(restored, plaintext);
    }

    #[test]
    fn test_unknown_id_fails() {
        let registry = KeyRegistry::new();
        let err = registry.encrypt("ghost", b"data").expect_err("unknown id");
        assert!(matches!(err, KeyError::NotFound { .. }));
    }

    #[test]
    fn test_update_replaces_material() {
        let mut registry = registry_with_key("k1");
        let obscured = registry.encrypt("k1", b"payload").expect("encrypt");

        registry
            .update_key("k1", generate_key_data(MIN_KEY_LENGTH))
            .expect("rotate key");
        let restored = registry.decrypt("k1", &obscured).expect("decrypt");
        // a rotated key no longer restores old ciphertext
        assert_ne!(restored, b"payload");

        let err = registry
            .update_key("missing", generate_key_data(MIN_KEY_LENGTH))
            .expect_err("unknown id");
        assert!(matches!(err, KeyError::NotFound { .. }));
    }

    #[test]
    fn test_delete_and_list() {
        let mut registry = registry_with_key("beta");
        registry
            .create_key("alpha", "cnt", "MIT", "1", generate_key_data(64))
            .expect("register second key");

        assert_eq!(registry.list_keys(), vec!["alpha", "beta"]);
        registry.delete_key("alpha").expect("delete key");
        assert_eq!(registry.list_keys(), vec!["beta"]);

        let err = registry.delete_key("alpha").expect_err("already deleted");
        assert!(matches!(err, KeyError::NotFound { .. }));
    }

    #[test]
    fn test_verify_license() {
        let registry = registry_with_key("k1");
        assert!(registry.verify_license("k1", "MIT").expect("known id"));
        assert!(!registry.verify_license("k1", "GPL").expect("known id"));
    }

    #[test]
    fn test_metadata_debug_hides_key_bytes() {
        let registry = registry_with_key("k1");
        let meta = registry.get("k1").expect("known id");
        let debug = format!("{meta:?}");
        assert!(debug.contains("key_len"));
        assert!(!debug.contains("key_data"));
        assert_eq!(meta.key_len(), MIN_KEY_LENGTH);
    }
}
