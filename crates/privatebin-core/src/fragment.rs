//! Base-58 key encoding for the URL fragment.
//!
//! The master key is appended to the paste URL after `#`. Browsers never
//! send the fragment to the server, which is what keeps the server
//! zero-knowledge. Base-58 (Bitcoin alphabet) needs no escaping in a URL and
//! leaves out the look-alike characters `0`, `O`, `I` and `l`.

use zeroize::Zeroizing;

use crate::crypto::{MasterKey, MASTER_KEY_LENGTH};
use crate::error::{PasteError, Result};

/// Encode the master key for the URL fragment.
pub fn encode_key(key: &MasterKey) -> String {
    bs58::encode(key.as_bytes()).into_string()
}

/// Decode a URL fragment back into the master key.
///
/// # Errors
///
/// Returns `PasteError::InvalidKeyEncoding` if the token contains characters
/// outside the base-58 alphabet or does not decode to exactly 32 bytes.
pub fn decode_key(token: &str) -> Result<MasterKey> {
    let bytes = Zeroizing::new(
        bs58::decode(token)
            .into_vec()
            .map_err(|e| PasteError::InvalidKeyEncoding(e.to_string()))?,
    );

    let array: [u8; MASTER_KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
        PasteError::InvalidKeyEncoding(format!(
            "expected {} bytes, got {}",
            MASTER_KEY_LENGTH,
            bytes.len()
        ))
    })?;

    Ok(MasterKey::from_bytes(array))
}
