//! privatebin - Create end-to-end encrypted pastes from the command line
//!
//! The paste is encrypted locally; the server only ever sees ciphertext and
//! the key travels in the URL fragment.

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod transport;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::cli::Cli;
use crate::errors::exit_code_for;
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "privatebin", &mut std::io::stdout());
        return;
    }

    init_logging(cli.verbose);

    if let Err(err) = app::run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code_for(&err));
    }
}
