//! Custom error types for krypt
//!
//! This module defines the error hierarchy for the crypto core using thiserror
//! for ergonomic error definitions. None of the variants ever carry key,
//! passphrase, or plaintext bytes.

use thiserror::Error;

/// The main error type for krypt operations
#[derive(Error, Debug)]
pub enum KryptError {
    /// Key length does not match the cipher's fixed requirement
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    /// Input is too short to contain a nonce
    #[error("Malformed envelope: {len} bytes is shorter than the {min}-byte nonce")]
    MalformedEnvelope { len: usize, min: usize },

    /// AEAD tag verification failed (wrong key or corrupted data)
    #[error("Authentication failed: invalid key or corrupted data")]
    Authentication,

    /// The cipher refused to encrypt the input
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// The system random source failed
    #[error("Random source error: {0}")]
    Random(String),

    /// Text decoding errors (base64, hex, UTF-8)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The key store holds no key
    #[error("No key available: log in first")]
    NoKey,

    /// Key store backend failure
    #[error("Key store error: {0}")]
    KeyStore(String),

    /// Vault header written by an unknown format version
    #[error("Unsupported vault header version: {0}")]
    UnsupportedVersion(u8),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl KryptError {
    /// Create a key length error for a key of `actual` bytes
    pub fn key_length(expected: usize, actual: usize) -> Self {
        Self::KeyLength { expected, actual }
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is a malformed envelope error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedEnvelope { .. })
    }
}

impl From<std::io::Error> for KryptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KryptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for krypt operations
pub type KryptResult<T> = Result<T, KryptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KryptError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_key_length_error() {
        let err = KryptError::key_length(32, 16);
        assert_eq!(
            err.to_string(),
            "Invalid key length: expected 32 bytes, got 16"
        );
        assert!(!err.is_authentication());
    }

    #[test]
    fn test_malformed_error() {
        let err = KryptError::MalformedEnvelope { len: 3, min: 12 };
        assert!(err.is_malformed());
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn test_authentication_message_is_fixed() {
        let err = KryptError::Authentication;
        assert!(err.is_authentication());
        assert_eq!(
            err.to_string(),
            "Authentication failed: invalid key or corrupted data"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let krypt_err: KryptError = io_err.into();
        assert!(matches!(krypt_err, KryptError::Io(_)));
    }
}
