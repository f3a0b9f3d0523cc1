use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Fixed-length opaque document hash supplied by the caller.
///
/// The registry never computes hashes; it only compares them byte for byte.
/// The text form is lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocHash([u8; DocHash::LEN]);

impl DocHash {
    /// Hash length in bytes.
    pub const LEN: usize = 32;

    /// Wraps raw hash bytes.
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a hash from a slice, rejecting any length other than 32.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let arr: [u8; Self::LEN] =
            bytes
                .try_into()
                .map_err(|_| ValidationError::InvalidLength {
                    field: "doc_hash",
                    expected: Self::LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Parses a hex-encoded hash (64 hex digits, either case).
    pub fn from_hex(value: &str) -> Result<Self, ValidationError> {
        let bytes = hex::decode(value).map_err(|_| ValidationError::PatternMismatch {
            field: "doc_hash",
            value: value.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DocHash::LEN]> for DocHash {
    fn from(bytes: [u8; DocHash::LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<String> for DocHash {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<DocHash> for String {
    fn from(value: DocHash) -> Self {
        value.to_hex()
    }
}

impl FromStr for DocHash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for DocHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DocHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocHash({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            DocHash::from_slice(&[0u8; 31]),
            Err(ValidationError::InvalidLength {
                field: "doc_hash",
                expected: 32,
                actual: 31
            })
        );
        assert!(DocHash::from_slice(&[0u8; 33]).is_err());
        assert!(DocHash::from_hex("abcd").is_err());
        assert!(DocHash::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn hex_text_form_is_lowercase() {
        let hash = DocHash::from_hex(&"AB".repeat(32)).unwrap();
        assert_eq!(hash.to_string(), "ab".repeat(32));
        assert_eq!(hash.as_bytes(), &[0xab; 32]);
    }
}
