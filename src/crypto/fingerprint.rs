//! SHA-256 content fingerprints
//!
//! Used by callers to integrity-check non-secret data. A fingerprint is not
//! a MAC: anyone can recompute it, so it must not stand in for the envelope's
//! authentication tag.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::{KryptError, KryptResult};

/// Length of a fingerprint in bytes
pub const FINGERPRINT_SIZE: usize = 32;

/// Compute the SHA-256 digest of `data`
pub fn fingerprint(data: &[u8]) -> [u8; FINGERPRINT_SIZE] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; FINGERPRINT_SIZE];
    out.copy_from_slice(&digest);
    out
}

/// A 32-byte SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// Fingerprint the given bytes
    pub fn of(data: &[u8]) -> Self {
        Self(fingerprint(data))
    }

    /// Get the digest bytes
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    /// Lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex digest
    pub fn from_hex(s: &str) -> KryptResult<Self> {
        let mut digest = [0u8; FINGERPRINT_SIZE];
        hex::decode_to_slice(s.trim(), &mut digest)
            .map_err(|e| KryptError::Encoding(format!("Invalid fingerprint: {}", e)))?;
        Ok(Self(digest))
    }

    /// Check whether `data` hashes to this fingerprint
    pub fn matches(&self, data: &[u8]) -> bool {
        fingerprint(data) == self.0
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for Fingerprint {
    fn from(digest: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(digest)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Fingerprint::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            Fingerprint::of(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Fingerprint::of(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_free_function_matches_type() {
        assert_eq!(&fingerprint(b"record"), Fingerprint::of(b"record").as_bytes());
    }

    #[test]
    fn test_matches() {
        let fp = Fingerprint::of(b"site: example.com");
        assert!(fp.matches(b"site: example.com"));
        assert!(!fp.matches(b"site: example.org"));
    }

    #[test]
    fn test_hex_parse() {
        let fp = Fingerprint::of(b"abc");
        let parsed = Fingerprint::from_hex(&fp.to_hex()).unwrap();
        assert_eq!(fp, parsed);

        let result = Fingerprint::from_hex("not hex");
        assert!(matches!(result, Err(KryptError::Encoding(_))));

        // Right alphabet, wrong length
        assert!(Fingerprint::from_hex("abcd").is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let fp = Fingerprint::of(b"abc");
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(
            json,
            "\"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\""
        );

        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
