//! # Secure Entropy
//!
//! The [`SecureRandom`] contract supplies cryptographically strong random
//! bytes. The system implementation draws from the OS CSPRNG through
//! `rand::rngs::OsRng`.

use rand::rngs::OsRng;
use rand::RngCore;

/// Cryptographically strong random byte source.
pub trait SecureRandom: Send + Sync + std::fmt::Debug {
    /// Fill `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]);

    /// Return `n` random bytes.
    fn random_bytes(&self, n: usize) -> Vec<u8> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf);
        buf
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bytes_has_requested_length() {
        assert_eq!(OsRandom.random_bytes(0).len(), 0);
        assert_eq!(OsRandom.random_bytes(17).len(), 17);
    }

    #[test]
    fn consecutive_draws_differ() {
        assert_ne!(OsRandom.random_bytes(16), OsRandom.random_bytes(16));
    }
}
