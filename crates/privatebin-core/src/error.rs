//! Error types for PrivateBin core operations.
//!
//! Every failure is surfaced as a distinct variant; nothing is retried and no
//! cryptographic parameter is ever replaced by a fallback. The CLI layer maps
//! these to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for PrivateBin core operations.
pub type Result<T> = std::result::Result<T, PasteError>;

/// Core error type for paste creation.
#[derive(Debug, Error)]
pub enum PasteError {
    /// The operating system could not supply random bytes
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// AEAD tag did not verify; no plaintext is returned
    #[error("Authentication failed: ciphertext or associated data was modified")]
    AuthenticationFailed,

    /// Expiry is not one of the values the server understands
    #[error("Invalid expiry \"{0}\" (expected one of 5min, 10min, 1hour, 1day, 1week, 1month, 1year, never)")]
    InvalidExpiry(String),

    /// Formatter is not one of the values the server understands
    #[error("Invalid formatter \"{0}\" (expected one of plaintext, syntaxhighlighting, markdown)")]
    InvalidFormatter(String),

    /// Key fragment is not valid base-58 or does not decode to 32 bytes
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Server reply is not JSON or lacks required fields
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),

    /// Caller passed a parameter no valid input can produce
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Encryption primitive failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Delivery of the envelope failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
