//! Cryptographic primitives for paste creation.
//!
//! Built on well-audited RustCrypto implementations:
//! - **getrandom**: operating system CSPRNG
//! - **PBKDF2-HMAC-SHA256**: password-strengthened key derivation
//! - **AES-256-GCM**: authenticated encryption with a 128-bit tag
//!
//! ## Security Model
//!
//! - A fresh 32-byte master key, 12-byte nonce and 8-byte salt per paste
//! - The master key and derived key are zeroized from memory on drop
//! - Neither key is ever logged or sent to the server
//!
//! ## Threat Model
//!
//! We defend against:
//! - A curious or compromised paste server
//! - Tampering with the ciphertext or its associated data in transit
//!
//! We do NOT defend against:
//! - Leaking the full secret URL (the fragment is the key)
//! - Compromised OS / keylogger

pub mod aead;
pub mod kdf;
pub mod key;
pub mod random;

pub use aead::{open, seal, NONCE_LENGTH, TAG_LENGTH};
pub use kdf::{derive_key, DerivedKey, KEY_LENGTH, PBKDF2_ITERATIONS};
pub use key::{MasterKey, MASTER_KEY_LENGTH};
pub use random::{OsRandom, RandomSource};
