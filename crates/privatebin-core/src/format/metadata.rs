//! Paste metadata: display formatter, expiry and burn-after-reading.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PasteError;

/// How the web client renders the decrypted paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    #[default]
    PlainText,
    SyntaxHighlighting,
    Markdown,
}

impl Formatter {
    pub const ALL: [Formatter; 3] = [
        Formatter::PlainText,
        Formatter::SyntaxHighlighting,
        Formatter::Markdown,
    ];

    /// Wire name of the formatter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Formatter::PlainText => "plaintext",
            Formatter::SyntaxHighlighting => "syntaxhighlighting",
            Formatter::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formatter {
    type Err = PasteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Formatter::ALL
            .into_iter()
            .find(|formatter| formatter.as_str() == value)
            .ok_or_else(|| PasteError::InvalidFormatter(value.to_string()))
    }
}

/// How long the server keeps the paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiry {
    #[default]
    FiveMinutes,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
    Never,
}

impl Expiry {
    pub const ALL: [Expiry; 8] = [
        Expiry::FiveMinutes,
        Expiry::TenMinutes,
        Expiry::OneHour,
        Expiry::OneDay,
        Expiry::OneWeek,
        Expiry::OneMonth,
        Expiry::OneYear,
        Expiry::Never,
    ];

    /// Wire name of the expiry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Expiry::FiveMinutes => "5min",
            Expiry::TenMinutes => "10min",
            Expiry::OneHour => "1hour",
            Expiry::OneDay => "1day",
            Expiry::OneWeek => "1week",
            Expiry::OneMonth => "1month",
            Expiry::OneYear => "1year",
            Expiry::Never => "never",
        }
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expiry {
    type Err = PasteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Expiry::ALL
            .into_iter()
            .find(|expiry| expiry.as_str() == value)
            .ok_or_else(|| PasteError::InvalidExpiry(value.to_string()))
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Metadata bound into the associated data of a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasteMetadata {
    pub formatter: Formatter,
    pub burn_after_reading: bool,
}

impl PasteMetadata {
    pub fn new(formatter: Formatter, burn_after_reading: bool) -> Self {
        Self {
            formatter,
            burn_after_reading,
        }
    }

    /// Discussion threads are not supported; the flag is always off.
    pub fn open_discussion(&self) -> bool {
        false
    }
}
