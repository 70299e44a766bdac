//! Associated data (adata) for a version 2 paste.
//!
//! The adata array is both sent to the server and fed to AES-GCM as
//! associated data. A decrypting client re-serializes the array it received
//! with `JSON.stringify` and authenticates against those bytes, so the
//! canonical form below must match that output exactly:
//!
//! ```text
//! [[iv,salt,iterations,keySizeBits,tagSizeBits,"aes","gcm","none"],formatter,openDiscussion,burnAfterReading]
//! ```
//!
//! No whitespace, the cipher parameters as an array (never an object), and
//! both flags as the integers `0`/`1`.

use std::fmt::Write as _;

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use super::metadata::{Formatter, PasteMetadata};
use super::spec::FormatSpec;

/// The ordered 4-element associated data structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedData {
    spec: FormatSpec,
    metadata: PasteMetadata,
}

impl AssociatedData {
    pub fn new(spec: FormatSpec, formatter: Formatter, burn_after_reading: bool) -> Self {
        Self {
            spec,
            metadata: PasteMetadata::new(formatter, burn_after_reading),
        }
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn metadata(&self) -> &PasteMetadata {
        &self.metadata
    }

    /// Canonical JSON text of the adata array.
    pub fn to_canonical_json(&self) -> String {
        let spec = &self.spec;
        let mut out = String::with_capacity(128);

        out.push_str("[[");
        push_json_string(&mut out, &spec.iv_base64());
        out.push(',');
        push_json_string(&mut out, &spec.salt_base64());
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            ",{},{},{},",
            spec.iterations(),
            spec.key_size_bits(),
            spec.tag_size_bits()
        );
        push_json_string(&mut out, spec.algorithm());
        out.push(',');
        push_json_string(&mut out, spec.mode());
        out.push(',');
        push_json_string(&mut out, spec.compression());
        out.push_str("],");
        push_json_string(&mut out, self.metadata.formatter.as_str());
        out.push(',');
        out.push(flag_char(self.metadata.open_discussion()));
        out.push(',');
        out.push(flag_char(self.metadata.burn_after_reading));
        out.push(']');

        out
    }

    /// Canonical adata bytes, as authenticated by AES-GCM.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        self.to_canonical_json().into_bytes()
    }
}

fn flag_char(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Append `value` as a JSON string literal, escaped the way `JSON.stringify`
/// escapes it.
fn push_json_string(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// The cipher parameters as an 8-element array.
struct SpecArray<'a>(&'a FormatSpec);

impl Serialize for SpecArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let spec = self.0;
        let mut seq = serializer.serialize_tuple(8)?;
        seq.serialize_element(&spec.iv_base64())?;
        seq.serialize_element(&spec.salt_base64())?;
        seq.serialize_element(&spec.iterations())?;
        seq.serialize_element(&spec.key_size_bits())?;
        seq.serialize_element(&spec.tag_size_bits())?;
        seq.serialize_element(spec.algorithm())?;
        seq.serialize_element(spec.mode())?;
        seq.serialize_element(spec.compression())?;
        seq.end()
    }
}

/// Embeds the adata in the request envelope with the same element order and
/// integer flags as [`AssociatedData::to_canonical_json`].
impl Serialize for AssociatedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(4)?;
        seq.serialize_element(&SpecArray(&self.spec))?;
        seq.serialize_element(self.metadata.formatter.as_str())?;
        seq.serialize_element(&u8::from(self.metadata.open_discussion()))?;
        seq.serialize_element(&u8::from(self.metadata.burn_after_reading))?;
        seq.end()
    }
}
