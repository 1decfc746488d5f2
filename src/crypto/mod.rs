//! Cryptographic functions for krypt
//!
//! Provides PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM envelopes
//! for the secrets stored by the password manager.
//!
//! Key derivation and encryption are independent: they only meet through
//! the 32-byte key.

pub mod armor;
pub mod encryption;
pub mod fingerprint;
pub mod key_derivation;
pub mod random;
pub mod secure_memory;

pub use encryption::{open, open_string, seal, seal_string, seal_with, NONCE_SIZE, TAG_SIZE};
pub use fingerprint::{fingerprint, Fingerprint};
pub use key_derivation::{
    derive_key, generate_salt, generate_salt_with, SymmetricKey, DEFAULT_SALT_LENGTH, KEY_LENGTH,
    PBKDF2_ITERATIONS,
};
pub use random::{rand_bytes, OsRandom, RandomSource};
pub use secure_memory::Passphrase;
