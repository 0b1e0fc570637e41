//! Binary wire format for the configuration store.
//!
//! A saved binary config is the concatenation of one record per entry,
//!
//! ```text
//! [u32 LE name_len][name bytes][u32 LE value_len][value bytes]
//! ```
//!
//! with no count header and no trailing marker, passed through a whole-buffer
//! single-byte XOR. The XOR pass is an obfuscation detail kept for
//! compatibility with existing `.cntconfigbin` files; it provides no
//! confidentiality whatsoever.
//!
//! The layout is fixed and versionless. Decoding must consume the stream in
//! exactly the shape encoding produced: ending anywhere other than a record
//! boundary is a [`ConfigError::MalformedBinary`].

use crate::error::{ConfigError, Result};
use crate::store::ConfigEntry;

/// The fixed obfuscation byte applied to the whole encoded buffer.
pub const OBFUSCATION_KEY: u8 = 0xBB;

/// XOR every byte of `data` with [`OBFUSCATION_KEY`].
///
/// The transform is involutive, so the same call both obscures and restores.
pub fn obfuscate(data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte ^= OBFUSCATION_KEY;
    }
}

/// Encode entries into the raw (not yet obfuscated) record stream.
#[must_use]
pub fn encode_records(entries: &[ConfigEntry]) -> Vec<u8> {
    let mut buf = Vec::new();
    for entry in entries {
        let name = entry.name.as_bytes();
        let value = entry.value.as_bytes();
        buf.extend_from_slice(&u32_len(name).to_le_bytes());
        buf.extend_from_slice(name);
        buf.extend_from_slice(&u32_len(value).to_le_bytes());
        buf.extend_from_slice(value);
    }
    buf
}

/// Decode a raw (already de-obfuscated) record stream into entries.
///
/// # Errors
/// Returns [`ConfigError::MalformedBinary`] if the stream ends anywhere
/// other than exactly at a record boundary, or if a field's bytes are not
/// valid UTF-8.
pub fn decode_records(data: &[u8]) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();
    let mut cursor = Cursor { data, pos: 0 };

    while !cursor.at_end() {
        let name = cursor.read_field("name")?;
        let value = cursor.read_field("value")?;
        entries.push(ConfigEntry { name, value });
    }

    Ok(entries)
}

// Strings are stored as raw bytes; lengths cannot exceed u32 in any file
// this format can describe.
#[allow(clippy::cast_possible_truncation)]
fn u32_len(bytes: &[u8]) -> u32 {
    bytes.len() as u32
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    fn read_field(&mut self, context: &'static str) -> Result<String> {
        let len = self.read_len(context)?;
        let bytes = self.read_bytes(len, context)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| ConfigError::MalformedBinary { context })
    }

    fn read_len(&mut self, context: &'static str) -> Result<usize> {
        let bytes = self.read_bytes(4, context)?;
        let raw: [u8; 4] = bytes.try_into().map_err(|_| ConfigError::MalformedBinary { context })?;
        Ok(u32::from_le_bytes(raw) as usize)
    }

    fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&[u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(ConfigError::MalformedBinary { context })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> ConfigEntry {
        ConfigEntry::new(name, value)
    }

    #[test]
    fn test_obfuscate_is_involutive() {
        let mut data = b"hello=world".to_vec();
        obfuscate(&mut data);
        assert_ne!(data, b"hello=world");
        obfuscate(&mut data);
        assert_eq!(data, b"hello=world");
    }

    #[test]
    fn test_record_layout() {
        let encoded = encode_records(&[entry("ab", "c")]);
        assert_eq!(
            encoded,
            vec![2, 0, 0, 0, b'a', b'b', 1, 0, 0, 0, b'c']
        );
    }

    #[test]
    fn test_roundtrip_preserves_order_and_empty_values() {
        let entries = vec![entry("x", "1"), entry("empty", ""), entry("x", "3")];
        let decoded = decode_records(&encode_records(&entries)).expect("decode own encoding");
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_empty_stream_is_empty_store() {
        let decoded = decode_records(&[]).expect("decode empty stream");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_truncated_length_fails() {
        let mut encoded = encode_records(&[entry("key", "value")]);
        encoded.extend_from_slice(&[1, 0]); // half a length prefix
        let err = decode_records(&encoded).expect_err("partial length must fail");
        assert!(matches!(err, ConfigError::MalformedBinary { .. }));
    }

    #[test]
    fn test_truncated_payload_fails() {
        let encoded = encode_records(&[entry("key", "value")]);
        let cut = &encoded[..encoded.len() - 2]; // inside the value bytes
        let err = decode_records(cut).expect_err("partial payload must fail");
        assert!(matches!(
            err,
            ConfigError::MalformedBinary { context: "value" }
        ));
    }
}
