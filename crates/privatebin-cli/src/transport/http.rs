//! JSON API submission over HTTP(S).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use privatebin_core::{PasteError, Result, Transport};

/// The PrivateBin server only answers with JSON when this header is present.
const REQUESTED_WITH: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "JSONHttpRequest";

/// Posts the request body to the instance's base URL.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(REQUESTED_WITH, HeaderValue::from_static(REQUESTED_WITH_VALUE));
        headers.insert(USER_AGENT, HeaderValue::from_static(user_agent()));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PasteError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

fn user_agent() -> &'static str {
    concat!("privatebin-cli/", env!("CARGO_PKG_VERSION"))
}

impl Transport for HttpTransport {
    fn submit(&self, body: &[u8]) -> Result<Vec<u8>> {
        debug!(url = %self.url, "Connecting to server");
        let response = self
            .client
            .post(&self.url)
            .body(body.to_vec())
            .send()
            .map_err(|e| PasteError::Transport(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Server responded");
        if !status.is_success() {
            return Err(PasteError::Transport(format!(
                "server at {} returned HTTP {}",
                self.url, status
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| PasteError::Transport(format!("failed to read response: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
