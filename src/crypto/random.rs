//! Unpredictable bytes for nonces and salts
//!
//! The default source is the operating system CSPRNG. It needs no manual
//! seeding: the OS generator initialises itself once per process and is safe
//! to use from any thread. Callers that need a different generator (or a
//! deterministic one in tests) pass their own [`RandomSource`].

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{KryptError, KryptResult};

/// A source of unpredictable bytes
pub trait RandomSource {
    /// Fill `dest` completely, or fail without partial output being used
    fn fill(&self, dest: &mut [u8]) -> KryptResult<()>;
}

/// The operating system's cryptographically secure random generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> KryptResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| KryptError::Random(e.to_string()))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill(&self, dest: &mut [u8]) -> KryptResult<()> {
        (**self).fill(dest)
    }
}

/// Generate exactly `len` random bytes from the system source
pub fn rand_bytes(len: usize) -> KryptResult<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    OsRandom.fill(&mut bytes)?;
    tracing::trace!(len, "drew random bytes");
    Ok(bytes)
}
