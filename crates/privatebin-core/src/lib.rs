//! # PrivateBin Core
//!
//! Core library for `privatebin` - a command-line client that creates
//! end-to-end encrypted pastes on a PrivateBin-compatible server.
//!
//! This crate builds the encrypted paste envelope independent of the CLI
//! interface and of how the envelope reaches the server.
//!
//! ## Architecture
//!
//! - **crypto**: random source, PBKDF2 key derivation, AES-256-GCM
//! - **format**: cipher parameters, paste metadata, associated data
//! - **envelope**: request/response JSON exchanged with the server
//! - **fragment**: base-58 key encoding for the URL fragment
//! - **paste**: end-to-end creation flow
//! - **transport**: the seam for delivering an envelope to a server
//! - **links**: secret and delete URLs shown to the user
//!
//! ## Zero knowledge
//!
//! The server only ever sees the ciphertext, the associated data and the
//! expiry. The master key travels in the URL fragment, which browsers never
//! send to the server.

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod format;
pub mod fragment;
pub mod links;
pub mod paste;
pub mod transport;

pub use crypto::{MasterKey, OsRandom, RandomSource};
pub use envelope::{PasteRequest, PasteResponse};
pub use error::{PasteError, Result};
pub use format::{AssociatedData, Expiry, FormatSpec, Formatter};
pub use links::PasteLinks;
pub use paste::{create_paste, publish, PasteOptions, SealedPaste};
pub use transport::Transport;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
