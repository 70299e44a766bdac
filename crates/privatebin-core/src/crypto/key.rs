//! The per-paste master key.

use zeroize::ZeroizeOnDrop;

use super::random::RandomSource;
use crate::error::Result;

/// Length of the master key in bytes.
pub const MASTER_KEY_LENGTH: usize = 32;

/// Random secret generated once per paste.
///
/// The master key is never sent to the server. It reaches the recipient only
/// through the URL fragment, and is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; MASTER_KEY_LENGTH],
}

impl MasterKey {
    /// Generate a fresh master key from `rng`.
    pub fn generate(rng: &mut impl RandomSource) -> Result<Self> {
        Ok(Self {
            bytes: rng.random_array()?,
        })
    }

    /// Wrap existing key bytes (e.g. decoded from a URL fragment).
    pub fn from_bytes(bytes: [u8; MASTER_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8; MASTER_KEY_LENGTH] {
        &self.bytes
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
