//! Cipher parameters for a single paste.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::crypto::random::RandomSource;
use crate::crypto::{NONCE_LENGTH, PBKDF2_ITERATIONS};
use crate::error::Result;

/// Salt length in bytes.
pub const SALT_LENGTH: usize = 8;

/// Key size announced to decrypting clients.
pub const KEY_SIZE_BITS: u32 = 256;

/// Tag size announced to decrypting clients.
pub const TAG_SIZE_BITS: u32 = 128;

/// Cipher name announced to decrypting clients.
pub const ALGORITHM: &str = "aes";

/// Cipher mode announced to decrypting clients.
pub const MODE: &str = "gcm";

/// Compression is never applied to the plaintext.
pub const COMPRESSION: &str = "none";

/// Cipher parameters used to encrypt one paste.
///
/// Only the IV and salt vary; everything else is a protocol constant. Both
/// are drawn fresh for every paste and are never reused, even when the same
/// password is used twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    iv: [u8; NONCE_LENGTH],
    salt: [u8; SALT_LENGTH],
}

impl FormatSpec {
    /// Build a spec from an explicit IV and salt.
    pub fn new(iv: [u8; NONCE_LENGTH], salt: [u8; SALT_LENGTH]) -> Self {
        Self { iv, salt }
    }

    /// Draw a fresh IV and salt from `rng` (two independent calls).
    pub fn generate(rng: &mut impl RandomSource) -> Result<Self> {
        let iv = rng.random_array()?;
        let salt = rng.random_array()?;
        Ok(Self { iv, salt })
    }

    pub fn iv(&self) -> &[u8; NONCE_LENGTH] {
        &self.iv
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    /// IV as unpadded standard Base64.
    pub fn iv_base64(&self) -> String {
        STANDARD_NO_PAD.encode(self.iv)
    }

    /// Salt as unpadded standard Base64.
    pub fn salt_base64(&self) -> String {
        STANDARD_NO_PAD.encode(self.salt)
    }

    pub fn iterations(&self) -> u32 {
        PBKDF2_ITERATIONS
    }

    pub fn key_size_bits(&self) -> u32 {
        KEY_SIZE_BITS
    }

    pub fn tag_size_bits(&self) -> u32 {
        TAG_SIZE_BITS
    }

    pub fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    pub fn mode(&self) -> &'static str {
        MODE
    }

    pub fn compression(&self) -> &'static str {
        COMPRESSION
    }
}
