//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives the vault's symmetric key from a user passphrase and a salt.
//! The parameters are fixed: changing any of them changes every derived key,
//! so they are part of the on-disk contract rather than configuration.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::random::{OsRandom, RandomSource};
use crate::error::{KryptError, KryptResult};

/// Number of PBKDF2 iterations
///
/// 4096 is a legacy floor. Raising it (or moving to a memory-hard KDF) needs
/// a new vault header version, since existing vaults would stop unlocking.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Length of the derived key in bytes (AES-256)
pub const KEY_LENGTH: usize = 32;

/// Salt length used when the caller does not choose one
pub const DEFAULT_SALT_LENGTH: usize = 32;

/// A 32-byte symmetric key
///
/// The key bytes are wiped when the value is dropped. Copies taken through
/// [`SymmetricKey::as_bytes`] are the caller's to erase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    key: [u8; KEY_LENGTH],
}

impl SymmetricKey {
    /// Wrap raw key bytes
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Wrap a key read back from storage, checking its length
    pub fn from_slice(bytes: &[u8]) -> KryptResult<Self> {
        let key: [u8; KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| KryptError::key_length(KEY_LENGTH, bytes.len()))?;
        Ok(Self { key })
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase
///
/// Deterministic: the same passphrase and salt always give the same key.
/// Empty inputs are accepted; passphrase policy is up to the caller.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> SymmetricKey {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase, salt, PBKDF2_ITERATIONS, &mut key);

    tracing::debug!(
        iterations = PBKDF2_ITERATIONS,
        salt_len = salt.len(),
        "derived key"
    );

    let derived = SymmetricKey::from_bytes(key);
    key.zeroize();
    derived
}

/// Generate a random salt of `len` bytes
pub fn generate_salt(len: usize) -> KryptResult<Vec<u8>> {
    generate_salt_with(&OsRandom, len)
}

/// Generate a salt from the given random source
pub fn generate_salt_with<R: RandomSource + ?Sized>(rng: &R, len: usize) -> KryptResult<Vec<u8>> {
    let mut salt = vec![0u8; len];
    rng.fill(&mut salt)?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer() {
        let key = derive_key(b"password", b"salt");
        assert_eq!(
            hex::encode(key.as_bytes()),
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
        );
    }

    #[test]
    fn test_same_passphrase_same_key() {
        let salt = generate_salt(DEFAULT_SALT_LENGTH).unwrap();
        let key1 = derive_key(b"test_passphrase", &salt);
        let key2 = derive_key(b"test_passphrase", &salt);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let salt = b"fixed-salt-1234567890";
        let key1 = derive_key(b"passphrase1", salt);
        let key2 = derive_key(b"passphrase2", salt);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let salt1 = generate_salt(DEFAULT_SALT_LENGTH).unwrap();
        let salt2 = generate_salt(DEFAULT_SALT_LENGTH).unwrap();
        let key1 = derive_key(b"same_passphrase", &salt1);
        let key2 = derive_key(b"same_passphrase", &salt2);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_inputs_accepted() {
        let key = derive_key(b"", b"");
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
        assert_ne!(key.as_bytes(), &[0u8; KEY_LENGTH]);
    }

    #[test]
    fn test_from_slice_checks_length() {
        let key = SymmetricKey::from_slice(&[7u8; KEY_LENGTH]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; KEY_LENGTH]);

        let err = SymmetricKey::from_slice(&[7u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            KryptError::KeyLength {
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn test_debug_redacts() {
        let key = derive_key(b"test-passphrase", b"salt-1234567890123456");
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }

    #[test]
    fn test_explicit_zeroize() {
        let mut key = SymmetricKey::from_bytes([0xAB; KEY_LENGTH]);
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; KEY_LENGTH]);
    }

    #[test]
    fn test_generate_salt_length() {
        assert_eq!(generate_salt(16).unwrap().len(), 16);
        assert_eq!(generate_salt(DEFAULT_SALT_LENGTH).unwrap().len(), 32);
    }
}
