//! Diagnostic logging on stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,privatebin=debug,privatebin_core=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. RUST_LOG takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
