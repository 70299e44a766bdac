//! Paste data format.
//!
//! This module defines the values a PrivateBin server and its web client
//! agree on for a version 2 paste:
//! - **spec**: cipher parameters (IV, salt and the fixed algorithm settings)
//! - **metadata**: formatter, expiry and burn-after-reading
//! - **adata**: the associated data array authenticated by AES-GCM

mod adata;
mod metadata;
mod spec;

pub use adata::AssociatedData;
pub use metadata::{Expiry, Formatter, PasteMetadata};
pub use spec::{
    FormatSpec, ALGORITHM, COMPRESSION, KEY_SIZE_BITS, MODE, SALT_LENGTH, TAG_SIZE_BITS,
};
