//! UTF-16 strings as handed out by the OS
//!
//! Device paths and instance ids stay in their native UTF-16 form until
//! they are either hashed (as little-endian bytes) or shown to a human.

use serde::{Serialize, Serializer};
use std::fmt;
use tracing::error;

/// Owned UTF-16 code units, without a terminating NUL
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString(Vec<u16>);

impl WideString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a fixed-size OS buffer, stopping at the first NUL
    pub fn from_nul_terminated(buffer: &[u16]) -> Self {
        let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Self(buffer[..len].to_vec())
    }

    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Little-endian byte view, the form fed into identity hashing
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|unit| unit.to_le_bytes()).collect()
    }

    /// ASCII case-insensitive comparison, as the OS compares device paths
    pub fn eq_ignore_ascii_case(&self, other: &WideString) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(&a, &b)| fold_ascii(a) == fold_ascii(b))
    }

    /// Index of the first `wanted` unit at or after `from`
    pub fn find_from(&self, wanted: char, from: usize) -> Option<usize> {
        let wanted = u16::try_from(u32::from(wanted)).ok()?;
        self.0
            .get(from..)?
            .iter()
            .position(|&c| c == wanted)
            .map(|pos| pos + from)
    }

    /// Strict conversion to UTF-8
    ///
    /// Unpaired surrogates are logged and produce an empty string.
    pub fn to_utf8(&self) -> String {
        match String::from_utf16(&self.0) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to convert string to UTF-8: {}", e);
                String::new()
            }
        }
    }
}

fn fold_ascii(unit: u16) -> u16 {
    if (u16::from(b'a')..=u16::from(b'z')).contains(&unit) {
        unit - 0x20
    } else {
        unit
    }
}

impl From<&str> for WideString {
    fn from(value: &str) -> Self {
        Self(value.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for WideString {
    fn from(mut units: Vec<u16>) -> Self {
        while units.last() == Some(&0) {
            units.pop();
        }
        Self(units)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(&self.0))
    }
}

impl Serialize for WideString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf16_lossy(&self.0))
    }
}
