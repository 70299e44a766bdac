//! Transport trait definition.
//!
//! The `Transport` trait is the single seam between the paste creation flow
//! and whatever delivers the envelope to a server (direct HTTP API call,
//! driving the web form, a test double). Every strategy receives the same
//! finished envelope; none of them touches the cryptography.

use crate::error::Result;

/// Delivers a paste envelope and returns the server's reply body.
pub trait Transport {
    /// Submit the JSON request body.
    ///
    /// # Returns
    ///
    /// The raw response body, to be parsed by
    /// [`crate::envelope::parse_response`].
    ///
    /// # Errors
    ///
    /// Returns `PasteError::Transport` if the envelope could not be delivered
    /// or the server refused it at the protocol level.
    fn submit(&self, body: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn submit(&self, body: &[u8]) -> Result<Vec<u8>> {
        (**self).submit(body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn submit(&self, body: &[u8]) -> Result<Vec<u8>> {
        (**self).submit(body)
    }
}
