//! Key collaborators
//!
//! The session key lives outside this crate (a key file, a keychain, ...).
//! [`KeyStore`] is the seam through which the core reads it. The core never
//! inspects where a store keeps its bytes.

use std::sync::Mutex;

use zeroize::Zeroizing;

use crate::crypto::{open, seal};
use crate::error::{KryptError, KryptResult};

/// Source and sink for the raw session key
///
/// Implementations hand out copies wrapped in [`Zeroizing`]; any other copy
/// they keep is theirs to erase.
pub trait KeyStore: Send + Sync {
    /// Read the stored key; empty when no key is stored
    fn get_key(&self) -> KryptResult<Zeroizing<Vec<u8>>>;

    /// Replace the stored key; an empty slice clears it
    fn set_key(&self, key: &[u8]) -> KryptResult<()>;

    /// Whether a non-empty key is stored
    fn has_key(&self) -> KryptResult<bool> {
        Ok(!self.get_key()?.is_empty())
    }

    /// Remove the stored key
    fn clear_key(&self) -> KryptResult<()> {
        self.set_key(&[])
    }
}

/// In-memory key store
pub struct MemoryKeyStore {
    key: Mutex<Zeroizing<Vec<u8>>>,
}

impl MemoryKeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_key(&[])
    }

    /// Create a store holding `key`
    pub fn with_key(key: &[u8]) -> Self {
        Self {
            key: Mutex::new(Zeroizing::new(key.to_vec())),
        }
    }
}

impl Default for MemoryKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for MemoryKeyStore {
    fn get_key(&self) -> KryptResult<Zeroizing<Vec<u8>>> {
        let guard = self
            .key
            .lock()
            .map_err(|e| KryptError::KeyStore(format!("Key store lock poisoned: {}", e)))?;
        Ok(Zeroizing::new(guard.to_vec()))
    }

    fn set_key(&self, key: &[u8]) -> KryptResult<()> {
        let mut guard = self
            .key
            .lock()
            .map_err(|e| KryptError::KeyStore(format!("Key store lock poisoned: {}", e)))?;
        // Dropping the old buffer wipes it
        *guard = Zeroizing::new(key.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for MemoryKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryKeyStore")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

fn stored_key<S: KeyStore + ?Sized>(store: &S) -> KryptResult<Zeroizing<Vec<u8>>> {
    let key = store.get_key()?;
    if key.is_empty() {
        return Err(KryptError::NoKey);
    }
    Ok(key)
}

/// Seal plaintext with the key held by `store`
pub fn seal_with_store<S: KeyStore + ?Sized>(store: &S, plaintext: &[u8]) -> KryptResult<Vec<u8>> {
    let key = stored_key(store)?;
    seal(plaintext, &key)
}

/// Open an envelope with the key held by `store`
pub fn open_with_store<S: KeyStore + ?Sized>(store: &S, envelope: &[u8]) -> KryptResult<Vec<u8>> {
    let key = stored_key(store)?;
    open(envelope, &key)
}
