//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The encryption key is derived from the master key concatenated with the
//! (possibly empty) paste password. Any client that holds the URL fragment
//! and the password re-runs the same derivation, so the parameters here are
//! part of the wire format and must not drift.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{PasteError, Result};

/// PBKDF2 iteration count used for every paste.
pub const PBKDF2_ITERATIONS: u32 = 310_000;

/// Length of derived key in bytes (32 bytes = AES-256).
pub const KEY_LENGTH: usize = 32;

/// A symmetric key derived from the master key and password.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Create a new DerivedKey from raw bytes.
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive the AES-256 key for a paste.
///
/// # Arguments
///
/// * `master_key` - Raw master key bytes
/// * `password` - Paste password; empty means "no password"
/// * `salt` - Random per-paste salt
/// * `iterations` - PBKDF2 round count, [`PBKDF2_ITERATIONS`] for real pastes
///
/// # Security
///
/// - Same inputs always produce the same key (deterministic)
/// - The full iteration count runs even when the password is empty
///
/// # Errors
///
/// Returns `PasteError::InvalidParameter` if `iterations` is zero.
pub fn derive_key(
    master_key: &[u8],
    password: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    if iterations == 0 {
        return Err(PasteError::InvalidParameter(
            "PBKDF2 iteration count must be positive".to_string(),
        ));
    }

    let mut secret = Zeroizing::new(Vec::with_capacity(master_key.len() + password.len()));
    secret.extend_from_slice(master_key);
    secret.extend_from_slice(password.as_bytes());

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(&secret, salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}
