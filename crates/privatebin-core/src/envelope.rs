//! Request and response envelopes exchanged with the paste server.
//!
//! Request (version 2 paste):
//! `{"v":2,"adata":[...],"meta":{"expire":"1day"},"ct":"<base64>"}`
//!
//! Response:
//! `{"status":0,"id":"...","url":"/?...","deletetoken":"..."}`

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{PasteError, Result};
use crate::format::{AssociatedData, Expiry};

/// Paste format version understood by the server.
pub const PASTE_VERSION: u8 = 2;

/// Server-side metadata that is not authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMeta {
    pub expire: Expiry,
}

/// Outbound paste creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteRequest {
    v: u8,
    adata: AssociatedData,
    meta: RequestMeta,
    ct: String,
}

impl PasteRequest {
    pub fn new(adata: AssociatedData, expiry: Expiry, ciphertext: &[u8]) -> Self {
        Self {
            v: PASTE_VERSION,
            adata,
            meta: RequestMeta { expire: expiry },
            ct: STANDARD_NO_PAD.encode(ciphertext),
        }
    }

    pub fn version(&self) -> u8 {
        self.v
    }

    pub fn adata(&self) -> &AssociatedData {
        &self.adata
    }

    pub fn expiry(&self) -> Expiry {
        self.meta.expire
    }

    /// Ciphertext and tag as unpadded Base64.
    pub fn ciphertext(&self) -> &str {
        &self.ct
    }

    /// Compact JSON body for the transport.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Build the request body from an expiry given as its wire string.
///
/// # Errors
///
/// Returns `PasteError::InvalidExpiry` if `expiry` is not one of the eight
/// values the server accepts.
pub fn build_request(adata: AssociatedData, expiry: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let expiry: Expiry = expiry.parse()?;
    PasteRequest::new(adata, expiry, ciphertext).to_json()
}

/// Parsed reply to a successful paste creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteResponse {
    /// Paste identifier
    pub id: String,
    /// Relative path and query of the paste, e.g. `/?abc123`
    pub url: String,
    /// Token that authorizes deleting the paste
    pub delete_token: String,
}

#[derive(Deserialize)]
struct RawResponse {
    id: Option<String>,
    url: Option<String>,
    deletetoken: Option<String>,
    message: Option<String>,
}

/// Parse the server's JSON reply.
///
/// Only the structure is checked; HTTP status handling belongs to the
/// transport.
///
/// # Errors
///
/// Returns `PasteError::MalformedResponse` if the body is not a JSON object
/// or lacks `id`, `url` or `deletetoken`.
pub fn parse_response(body: &[u8]) -> Result<PasteResponse> {
    let raw: RawResponse = serde_json::from_slice(body)
        .map_err(|e| PasteError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    match (raw.id, raw.url, raw.deletetoken) {
        (Some(id), Some(url), Some(delete_token)) => Ok(PasteResponse {
            id,
            url,
            delete_token,
        }),
        (id, url, deletetoken) => {
            let missing: Vec<&str> = [
                ("id", id.is_none()),
                ("url", url.is_none()),
                ("deletetoken", deletetoken.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();

            let mut detail = format!("missing field(s): {}", missing.join(", "));
            if let Some(message) = raw.message {
                detail.push_str(&format!(" (server said: {})", message));
            }
            Err(PasteError::MalformedResponse(detail))
        }
    }
}
