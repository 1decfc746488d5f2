//! Vault header: the non-secret parameters of a vault
//!
//! A header holds the KDF salt and a verification envelope: a fixed marker
//! sealed under the vault key. Unlocking re-derives the key from the
//! passphrase and checks it by opening that envelope, so a returning user
//! gets the same key back without the key itself ever being stored.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::crypto::{
    armor, derive_key, generate_salt_with, open, seal_with, OsRandom, Passphrase, RandomSource,
    SymmetricKey,
};
use crate::error::{KryptError, KryptResult};

/// Current header format version
pub const HEADER_VERSION: u8 = 1;

const VERIFY_MARKER: &[u8] = b"krypt_verify";

fn default_version() -> u8 {
    HEADER_VERSION
}

/// Per-vault key parameters, safe to persist next to the encrypted data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultHeader {
    /// Format version for future KDF or cipher changes
    #[serde(default = "default_version")]
    pub version: u8,
    /// KDF salt (base64 encoded)
    pub salt: String,
    /// Verification marker sealed under the vault key (base64 encoded)
    pub check: String,
}

impl VaultHeader {
    /// Create a header for a new passphrase, returning it with the derived key
    pub fn create(passphrase: &Passphrase, salt_length: usize) -> KryptResult<(Self, SymmetricKey)> {
        Self::create_with(&OsRandom, passphrase, salt_length)
    }

    /// Create a header, drawing the salt and nonce from `rng`
    pub fn create_with<R: RandomSource + ?Sized>(
        rng: &R,
        passphrase: &Passphrase,
        salt_length: usize,
    ) -> KryptResult<(Self, SymmetricKey)> {
        let salt = generate_salt_with(rng, salt_length)?;
        let key = derive_key(passphrase, &salt);
        let check = seal_with(rng, VERIFY_MARKER, key.as_bytes())?;

        let header = Self {
            version: HEADER_VERSION,
            salt: STANDARD.encode(&salt),
            check: armor::encode(&check),
        };

        tracing::debug!(salt_len = salt.len(), "created vault header");

        Ok((header, key))
    }

    /// Decode the salt
    pub fn salt(&self) -> KryptResult<Vec<u8>> {
        STANDARD
            .decode(&self.salt)
            .map_err(|e| KryptError::Encoding(format!("Invalid salt encoding: {}", e)))
    }

    /// Derive the vault key from `passphrase` and verify it
    ///
    /// A wrong passphrase fails with [`KryptError::Authentication`].
    pub fn unlock(&self, passphrase: &Passphrase) -> KryptResult<SymmetricKey> {
        if self.version != HEADER_VERSION {
            return Err(KryptError::UnsupportedVersion(self.version));
        }

        let salt = self.salt()?;
        let check = armor::decode(&self.check)?;
        let key = derive_key(passphrase, &salt);

        let marker = open(&check, key.as_bytes())?;
        if marker != VERIFY_MARKER {
            return Err(KryptError::Authentication);
        }

        Ok(key)
    }

    /// Check a passphrase without keeping the key
    pub fn verify(&self, passphrase: &Passphrase) -> KryptResult<bool> {
        match self.unlock(passphrase) {
            Ok(_) => Ok(true),
            Err(KryptError::Authentication) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
