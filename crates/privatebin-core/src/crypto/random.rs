//! Cryptographically secure random bytes.

use crate::error::{PasteError, Result};

/// Source of cryptographically secure random bytes.
///
/// Implementations must fail rather than hand back zeroed or predictable
/// bytes when the underlying generator is unavailable.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Return `len` freshly generated random bytes.
    fn random_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Return a fixed-size array of random bytes.
    fn random_array<const N: usize>(&mut self) -> Result<[u8; N]>
    where
        Self: Sized,
    {
        let mut buf = [0u8; N];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| PasteError::EntropyUnavailable(e.to_string()))
    }
}
