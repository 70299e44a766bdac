use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use privatebin_core::{Expiry, Formatter, VERSION};

use crate::output::OutputMode;

/// privatebin - Create end-to-end encrypted pastes on a PrivateBin server
#[derive(Parser)]
#[command(name = "privatebin")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(after_help = "Examples:
  privatebin \"encrypt this string\" --expires 1day --burn --password Secret
  cat textfile | privatebin --url https://yourprivatebin.com")]
pub struct Cli {
    /// Text to paste (read from stdin when omitted and stdin is piped)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// URL of the PrivateBin instance [default: https://privatebin.net]
    #[arg(long)]
    pub url: Option<String>,

    /// How long the paste should live
    /// (5min, 10min, 1hour, 1day, 1week, 1month, 1year, never) [default: 5min]
    #[arg(long, value_name = "EXPIRY", value_parser = parse_expiry)]
    pub expires: Option<Expiry>,

    /// Burn after reading
    #[arg(short = 'B', long)]
    pub burn: bool,

    /// Password for the paste
    #[arg(long, env = "PRIVATEBIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Prompt for the paste password on the terminal (overrides --password)
    #[arg(long)]
    pub ask_password: bool,

    /// Paste format [default: plain]
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Output format of the returned data [default: simple]
    #[arg(long, value_enum, value_name = "OUTPUT")]
    pub output: Option<OutputMode>,

    /// Config file (default: ./.privatebin.toml or $XDG_CONFIG_HOME/privatebin/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Paste format names accepted on the command line and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain text
    #[value(alias = "plaintext")]
    Plain,
    /// Source code with syntax highlighting
    #[value(alias = "syntaxhighlighting")]
    Code,
    /// Markdown
    #[value(alias = "markdown")]
    Md,
}

impl From<FormatArg> for Formatter {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plain => Formatter::PlainText,
            FormatArg::Code => Formatter::SyntaxHighlighting,
            FormatArg::Md => Formatter::Markdown,
        }
    }
}

fn parse_expiry(value: &str) -> Result<Expiry, String> {
    value.parse::<Expiry>().map_err(|e| e.to_string())
}
