//! Constants used throughout the CLI.

/// Default PrivateBin instance.
pub const DEFAULT_URL: &str = "https://privatebin.net";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Config file looked up in the working directory before the XDG location.
pub const LOCAL_CONFIG_FILE: &str = ".privatebin.toml";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (explicitly named config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The paste could not be delivered to the server.
    pub const TRANSPORT_FAILED: i32 = 5;

    /// The server replied with something other than a created paste.
    pub const SERVER_ERROR: i32 = 6;
}
