//! User-facing URLs for a created paste.

use crate::crypto::MasterKey;
use crate::envelope::PasteResponse;
use crate::fragment::encode_key;

/// The URLs handed back to the user once the server accepted a paste.
#[derive(Clone, PartialEq, Eq)]
pub struct PasteLinks {
    /// Paste identifier assigned by the server
    pub id: String,
    /// `<base><url>#<key>`: anyone holding this can read the paste
    pub secret_url: String,
    /// `<base><url>&deletetoken=<token>`: deletes the paste
    pub delete_url: String,
}

impl PasteLinks {
    pub fn new(base_url: &str, response: &PasteResponse, master_key: &MasterKey) -> Self {
        Self {
            id: response.id.clone(),
            secret_url: format!("{}{}#{}", base_url, response.url, encode_key(master_key)),
            delete_url: format!(
                "{}{}&deletetoken={}",
                base_url, response.url, response.delete_token
            ),
        }
    }
}

// The secret URL carries the key; keep it out of debug logs.
impl std::fmt::Debug for PasteLinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteLinks")
            .field("id", &self.id)
            .field("secret_url", &"[REDACTED]")
            .field("delete_url", &"[REDACTED]")
            .finish()
    }
}
