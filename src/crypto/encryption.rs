//! AES-256-GCM envelopes
//!
//! An envelope is `nonce || ciphertext || tag` in one contiguous buffer.
//! The nonce length is a protocol constant, so there is no length prefix and
//! no version byte. Each seal draws a fresh random nonce.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::key_derivation::KEY_LENGTH;
use super::random::{OsRandom, RandomSource};
use crate::error::{KryptError, KryptResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

fn cipher_for(key: &[u8]) -> KryptResult<Aes256Gcm> {
    if key.len() != KEY_LENGTH {
        return Err(KryptError::key_length(KEY_LENGTH, key.len()));
    }

    Aes256Gcm::new_from_slice(key).map_err(|_| KryptError::key_length(KEY_LENGTH, key.len()))
}

/// Seal plaintext into an envelope using a fresh random nonce
pub fn seal(plaintext: &[u8], key: &[u8]) -> KryptResult<Vec<u8>> {
    seal_with(&OsRandom, plaintext, key)
}

/// Seal plaintext, drawing the nonce from `rng`
///
/// The source must never repeat a nonce under the same key.
pub fn seal_with<R: RandomSource + ?Sized>(
    rng: &R,
    plaintext: &[u8],
    key: &[u8],
) -> KryptResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rng.fill(&mut nonce_bytes)?;

    let body = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| KryptError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + body.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&body);

    tracing::trace!(
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "sealed envelope"
    );

    Ok(envelope)
}

/// Open an envelope, returning the plaintext only if the tag verifies
pub fn open(envelope: &[u8], key: &[u8]) -> KryptResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    if envelope.len() < NONCE_SIZE {
        return Err(KryptError::MalformedEnvelope {
            len: envelope.len(),
            min: NONCE_SIZE,
        });
    }

    let (nonce, body) = envelope.split_at(NONCE_SIZE);

    // Wrong key and tampering must be indistinguishable
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), body)
        .map_err(|_| KryptError::Authentication)?;

    tracing::trace!(envelope_len = envelope.len(), "opened envelope");

    Ok(plaintext)
}

/// Seal a string
pub fn seal_string(plaintext: &str, key: &[u8]) -> KryptResult<Vec<u8>> {
    seal(plaintext.as_bytes(), key)
}

/// Open an envelope holding a UTF-8 string
pub fn open_string(envelope: &[u8], key: &[u8]) -> KryptResult<String> {
    let plaintext = open(envelope, key)?;
    String::from_utf8(plaintext)
        .map_err(|e| KryptError::Encoding(format!("Invalid UTF-8 in decrypted data: {}", e)))
}
