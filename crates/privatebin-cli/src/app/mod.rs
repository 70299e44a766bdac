//! Application flow for the privatebin CLI.
//!
//! This module provides:
//! - Config file resolution
//! - Effective settings from flags, config and defaults
//! - The paste run itself

mod resolver;
mod settings;

use tracing::info;

use privatebin_core::{publish, OsRandom};

use crate::cli::Cli;
use crate::helpers::{read_paste_text, resolve_password};
use crate::output::print_links;
use crate::transport::HttpTransport;

// Re-export public API
pub use resolver::{load_config, resolve_config_path};
pub use settings::Settings;

/// Encrypt the paste, send it and print the resulting links.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let location = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&location)?;
    let settings = Settings::resolve(cli, &config)?;

    let text = read_paste_text(cli.text.as_deref())?;
    let password = resolve_password(cli.password.as_deref(), cli.ask_password)?;
    let options = settings.paste_options(password);

    let transport = HttpTransport::new(&settings.base_url, settings.timeout)?;
    info!(
        url = %settings.base_url,
        expiry = %settings.expiry,
        burn = settings.burn_after_reading,
        "Creating paste"
    );
    let links = publish(
        &text,
        &options,
        &mut OsRandom,
        &transport,
        &settings.base_url,
    )?;

    print_links(&links, settings.output)
}
