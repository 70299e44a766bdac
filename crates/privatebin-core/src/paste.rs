//! Paste creation flow.
//!
//! One call builds one envelope end to end:
//!
//! 1. generate the master key, IV and salt
//! 2. wrap the text as `{"paste": ...}` and serialize it
//! 3. derive the AES key from master key + password
//! 4. seal with the canonical adata as associated data
//! 5. assemble the request envelope
//!
//! [`publish`] additionally hands the envelope to a [`Transport`] and turns
//! the reply into [`PasteLinks`].

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{derive_key, seal, MasterKey, RandomSource};
use crate::envelope::{parse_response, PasteRequest, PasteResponse};
use crate::error::Result;
use crate::format::{AssociatedData, Expiry, FormatSpec, Formatter};
use crate::links::PasteLinks;
use crate::transport::Transport;

/// The plaintext object the web client expects after decryption.
#[derive(Serialize)]
struct PasteContent<'a> {
    paste: &'a str,
}

/// Per-paste settings chosen by the user.
#[derive(Debug, Default)]
pub struct PasteOptions {
    pub expiry: Expiry,
    pub formatter: Formatter,
    pub burn_after_reading: bool,
    /// Optional password; `None` and an empty string both mean "no password"
    pub password: Option<SecretString>,
}

impl PasteOptions {
    pub fn new(expiry: Expiry, formatter: Formatter, burn_after_reading: bool) -> Self {
        Self {
            expiry,
            formatter,
            burn_after_reading,
            password: None,
        }
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    fn password(&self) -> &str {
        self.password
            .as_ref()
            .map(|password| password.expose_secret())
            .unwrap_or("")
    }

    fn has_password(&self) -> bool {
        !self.password().is_empty()
    }
}

/// An encrypted paste ready to be sent, plus the key to share with readers.
#[derive(Debug)]
pub struct SealedPaste {
    request: PasteRequest,
    master_key: MasterKey,
}

impl SealedPaste {
    pub fn request(&self) -> &PasteRequest {
        &self.request
    }

    pub fn master_key(&self) -> &MasterKey {
        &self.master_key
    }

    /// Combine the server reply with the key fragment.
    pub fn links(&self, base_url: &str, response: &PasteResponse) -> PasteLinks {
        PasteLinks::new(base_url, response, &self.master_key)
    }
}

/// Encrypt `text` into a paste envelope.
///
/// # Errors
///
/// Returns `PasteError::EntropyUnavailable` if `rng` cannot supply the key,
/// IV or salt. Nothing is encrypted in that case.
pub fn create_paste(
    text: &str,
    options: &PasteOptions,
    rng: &mut impl RandomSource,
) -> Result<SealedPaste> {
    debug!("Generating master key");
    let master_key = MasterKey::generate(rng)?;
    let spec = FormatSpec::generate(rng)?;
    let adata = AssociatedData::new(spec, options.formatter, options.burn_after_reading);

    let plaintext = Zeroizing::new(serde_json::to_vec(&PasteContent { paste: text })?);

    debug!(iterations = adata.spec().iterations(), "Deriving encryption key");
    let key = derive_key(
        master_key.as_bytes(),
        options.password(),
        adata.spec().salt(),
        adata.spec().iterations(),
    )?;

    debug!(
        formatter = %options.formatter,
        burn_after_reading = options.burn_after_reading,
        has_password = options.has_password(),
        "Encrypting paste"
    );
    let ciphertext = seal(
        &key,
        adata.spec().iv(),
        &plaintext,
        &adata.to_canonical_bytes(),
    )?;

    Ok(SealedPaste {
        request: PasteRequest::new(adata, options.expiry, &ciphertext),
        master_key,
    })
}

/// Encrypt `text`, submit it through `transport` and build the user's links.
///
/// `base_url` is the prefix the server's relative paste URL is appended to.
pub fn publish(
    text: &str,
    options: &PasteOptions,
    rng: &mut impl RandomSource,
    transport: &impl Transport,
    base_url: &str,
) -> Result<PasteLinks> {
    let sealed = create_paste(text, options, rng)?;
    let body = sealed.request().to_json()?;

    debug!(bytes = body.len(), "Submitting paste");
    let reply = transport.submit(&body)?;

    debug!(bytes = reply.len(), "Reading response");
    let response = parse_response(&reply)?;
    debug!(id = %response.id, "Paste created");

    Ok(sealed.links(base_url, &response))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::crypto::{open, OsRandom, PBKDF2_ITERATIONS};
    use crate::error::PasteError;

    /// Deterministic source: each call returns the next counter bytes.
    struct CountingRandom {
        next: u8,
    }

    impl RandomSource for CountingRandom {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for byte in dest.iter_mut() {
                *byte = self.next;
                self.next = self.next.wrapping_add(1);
            }
            Ok(())
        }
    }

    /// Source that runs dry after `remaining` calls.
    struct DrainingRandom {
        remaining: usize,
    }

    impl RandomSource for DrainingRandom {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            if self.remaining == 0 {
                return Err(PasteError::EntropyUnavailable("exhausted".to_string()));
            }
            self.remaining -= 1;
            dest.fill(0x11);
            Ok(())
        }
    }

    struct CannedTransport {
        reply: Result<Vec<u8>>,
        sent: RefCell<Vec<Vec<u8>>>,
    }

    impl CannedTransport {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.as_bytes().to_vec()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        fn submit(&self, body: &[u8]) -> Result<Vec<u8>> {
            self.sent.borrow_mut().push(body.to_vec());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(err) => Err(PasteError::Transport(err.to_string())),
            }
        }
    }

    fn decrypt(sealed: &SealedPaste, password: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let adata = sealed.request().adata();
        let key = derive_key(
            sealed.master_key().as_bytes(),
            password,
            adata.spec().salt(),
            PBKDF2_ITERATIONS,
        )?;
        open(&key, adata.spec().iv(), ciphertext, &adata.to_canonical_bytes())
    }

    fn raw_ciphertext(sealed: &SealedPaste) -> Vec<u8> {
        use base64::engine::general_purpose::STANDARD_NO_PAD;
        use base64::Engine;
        STANDARD_NO_PAD
            .decode(sealed.request().ciphertext())
            .unwrap()
    }

    #[test]
    fn test_empty_password_counts_as_none() {
        let options = PasteOptions::default();
        assert!(!options.has_password());

        let options = PasteOptions::default().with_password(SecretString::from(String::new()));
        assert!(!options.has_password());
        assert_eq!(options.password(), "");

        let options = PasteOptions::default().with_password(SecretString::from("pw".to_string()));
        assert!(options.has_password());
    }

    #[test]
    fn test_round_trip_with_password() {
        let options = PasteOptions::new(Expiry::OneDay, Formatter::Markdown, true)
            .with_password(SecretString::from("correct horse".to_string()));
        let sealed = create_paste("# hello", &options, &mut OsRandom).unwrap();
        let ciphertext = raw_ciphertext(&sealed);

        let plaintext = decrypt(&sealed, "correct horse", &ciphertext).unwrap();
        assert_eq!(plaintext, br##"{"paste":"# hello"}"##);

        let wrong = decrypt(&sealed, "battery staple", &ciphertext);
        assert!(matches!(wrong, Err(PasteError::AuthenticationFailed)));
        let missing = decrypt(&sealed, "", &ciphertext);
        assert!(matches!(missing, Err(PasteError::AuthenticationFailed)));
    }

    #[test]
    fn test_round_trip_without_password_and_tamper_detection() {
        let options = PasteOptions::default();
        let sealed = create_paste("line1\nline2 \"quoted\"", &options, &mut OsRandom).unwrap();
        let ciphertext = raw_ciphertext(&sealed);

        let plaintext = decrypt(&sealed, "", &ciphertext).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&plaintext).unwrap();
        assert_eq!(value["paste"], "line1\nline2 \"quoted\"");

        // Every single-byte change to the adata must break authentication.
        let adata = sealed.request().adata();
        let key = derive_key(
            sealed.master_key().as_bytes(),
            "",
            adata.spec().salt(),
            PBKDF2_ITERATIONS,
        )
        .unwrap();
        let canonical = adata.to_canonical_bytes();
        for index in 0..canonical.len() {
            let mut tampered = canonical.clone();
            tampered[index] ^= 0x01;
            let result = open(&key, adata.spec().iv(), &ciphertext, &tampered);
            assert!(
                matches!(result, Err(PasteError::AuthenticationFailed)),
                "byte {index} not authenticated"
            );
        }
    }

    #[test]
    fn test_key_iv_salt_drawn_in_order() {
        let mut rng = CountingRandom { next: 0 };
        let sealed = create_paste("x", &PasteOptions::default(), &mut rng).unwrap();

        let expected_key: Vec<u8> = (0u8..32).collect();
        let expected_iv: Vec<u8> = (32u8..44).collect();
        let expected_salt: Vec<u8> = (44u8..52).collect();
        assert_eq!(sealed.master_key().as_bytes().to_vec(), expected_key);
        assert_eq!(sealed.request().adata().spec().iv().to_vec(), expected_iv);
        assert_eq!(
            sealed.request().adata().spec().salt().to_vec(),
            expected_salt
        );
    }

    #[test]
    fn test_successive_pastes_differ() {
        let options = PasteOptions::new(Expiry::OneHour, Formatter::PlainText, false)
            .with_password(SecretString::from("pw".to_string()));
        let a = create_paste("same text", &options, &mut OsRandom).unwrap();
        let b = create_paste("same text", &options, &mut OsRandom).unwrap();

        assert_ne!(a.master_key().as_bytes(), b.master_key().as_bytes());
        assert_ne!(
            a.request().adata().spec().iv(),
            b.request().adata().spec().iv()
        );
        assert_ne!(
            a.request().adata().spec().salt(),
            b.request().adata().spec().salt()
        );
        assert_ne!(a.request().ciphertext(), b.request().ciphertext());
    }

    #[test]
    fn test_entropy_failure_aborts() {
        for remaining in 0..3 {
            let mut rng = DrainingRandom { remaining };
            let result = create_paste("x", &PasteOptions::default(), &mut rng);
            assert!(matches!(result, Err(PasteError::EntropyUnavailable(_))));
        }
    }

    #[test]
    fn test_publish_returns_links() {
        let transport = CannedTransport::replying(
            r#"{"status":0,"id":"f00d","url":"/?f00d","deletetoken":"cafe"}"#,
        );
        let mut rng = CountingRandom { next: 0 };
        let options = PasteOptions::new(Expiry::Never, Formatter::PlainText, false);
        let links = publish("hello", &options, &mut rng, &transport, "https://bin.example").unwrap();

        assert_eq!(links.id, "f00d");
        assert!(links.secret_url.starts_with("https://bin.example/?f00d#"));
        assert_eq!(
            links.delete_url,
            "https://bin.example/?f00d&deletetoken=cafe"
        );

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&sent[0]).unwrap();
        assert_eq!(body["v"], 2);
        assert_eq!(body["meta"]["expire"], "never");
        // The key never leaves the process except in the fragment.
        let fragment = links.secret_url.split('#').nth(1).unwrap();
        assert!(!String::from_utf8_lossy(&sent[0]).contains(fragment));
    }

    #[test]
    fn test_publish_propagates_transport_error() {
        let transport = CannedTransport {
            reply: Err(PasteError::Transport("connection refused".to_string())),
            sent: RefCell::new(Vec::new()),
        };
        let result = publish(
            "hello",
            &PasteOptions::default(),
            &mut CountingRandom { next: 0 },
            &transport,
            "https://bin.example",
        );
        assert!(matches!(result, Err(PasteError::Transport(_))));
    }

    #[test]
    fn test_publish_rejects_malformed_reply() {
        let transport = CannedTransport::replying(r#"{"status":1,"message":"Invalid data."}"#);
        let result = publish(
            "hello",
            &PasteOptions::default(),
            &mut CountingRandom { next: 0 },
            &transport,
            "https://bin.example",
        );
        assert!(matches!(result, Err(PasteError::MalformedResponse(_))));
    }
}
