//! Rendering the links of a created paste.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;

use privatebin_core::PasteLinks;

/// How the created paste is reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// The secret URL only, stable for scripts
    #[default]
    Simple,
    /// Labelled secret and delete URLs
    Rich,
    /// A single JSON object
    Json,
}

#[derive(Serialize)]
struct JsonLinks<'a> {
    url: &'a str,
    delete_url: &'a str,
    id: &'a str,
}

/// Whether labels should be coloured: stdout is a TTY, NO_COLOR is unset
/// and TERM is not dumb.
pub fn color_enabled() -> bool {
    let is_tty = io::stdout().is_terminal();
    let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
    let no_color_env = std::env::var("NO_COLOR").is_ok();
    is_tty && !no_color_env && !term_is_dumb
}

pub fn render(links: &PasteLinks, mode: OutputMode, color: bool) -> anyhow::Result<String> {
    let rendered = match mode {
        OutputMode::Simple => format!("{}\n", links.secret_url),
        OutputMode::Rich => {
            let (secret_label, delete_label) = if color {
                (
                    "Secret URL:".green().bold().to_string(),
                    "Delete URL:".red().bold().to_string(),
                )
            } else {
                ("Secret URL:".to_string(), "Delete URL:".to_string())
            };
            format!(
                "{} {}\n{} {}\n",
                secret_label, links.secret_url, delete_label, links.delete_url
            )
        }
        OutputMode::Json => {
            let json = serde_json::to_string(&JsonLinks {
                url: &links.secret_url,
                delete_url: &links.delete_url,
                id: &links.id,
            })?;
            format!("{}\n", json)
        }
    };
    Ok(rendered)
}

pub fn print_links(links: &PasteLinks, mode: OutputMode) -> anyhow::Result<()> {
    let rendered = render(links, mode, color_enabled())?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| anyhow::anyhow!("Failed to write output: {}", e))
}
