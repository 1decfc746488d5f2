//! krypt - cryptographic core of the krypt secrets manager
//!
//! Derives a 32-byte key from a passphrase (PBKDF2-HMAC-SHA256, 4096
//! iterations) and uses it to seal secrets into self-contained AES-256-GCM
//! envelopes: `nonce || ciphertext || tag`.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, envelopes, random bytes, fingerprints
//! - `keys`: the key store seam used by the session layer
//! - `vault`: persisted salt and passphrase check for a vault
//! - `config`: settings and path management
//! - `logging`: tracing subscriber setup
//! - `error`: error types
//!
//! # Example
//!
//! ```
//! use krypt::crypto::{derive_key, generate_salt, open, seal, DEFAULT_SALT_LENGTH};
//!
//! let salt = generate_salt(DEFAULT_SALT_LENGTH)?;
//! let key = derive_key(b"master passphrase", &salt);
//!
//! let envelope = seal(b"example.com: hunter2", key.as_bytes())?;
//! assert_eq!(open(&envelope, key.as_bytes())?, b"example.com: hunter2");
//! # Ok::<(), krypt::KryptError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod logging;
pub mod vault;

pub use crypto::{derive_key, fingerprint, open, rand_bytes, seal, SymmetricKey};
pub use error::{KryptError, KryptResult};
pub use keys::{KeyStore, MemoryKeyStore};
pub use vault::VaultHeader;
