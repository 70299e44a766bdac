//! AES-256-GCM authenticated encryption.
//!
//! Output layout is the one the PrivateBin web client expects from WebCrypto:
//! `[ciphertext][16-byte tag]`, with the nonce and associated data carried
//! separately in the envelope.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};

use super::kdf::DerivedKey;
use crate::error::{PasteError, Result};

/// AES-GCM nonce length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Encrypt and authenticate `plaintext`, binding `aad` into the tag.
///
/// Returns `ciphertext || tag`. The nonce must never be reused with the same
/// key; the paste flow draws a fresh one for every call.
pub fn seal(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PasteError::Crypto(e.to_string()))?;

    cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| PasteError::Crypto(format!("AES-GCM seal failed: {}", e)))
}

/// Verify and decrypt `ciphertext || tag`.
///
/// # Errors
///
/// Returns `PasteError::AuthenticationFailed` if the tag does not verify for
/// this key, nonce and associated data. No partial plaintext is released.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    ciphertext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_LENGTH {
        return Err(PasteError::AuthenticationFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PasteError::Crypto(e.to_string()))?;

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| PasteError::AuthenticationFailed)
}
