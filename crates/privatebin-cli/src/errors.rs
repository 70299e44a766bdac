//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use privatebin_core::PasteError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a failure surfaced from core paste creation.
fn paste_exit_code(err: &PasteError) -> i32 {
    use super::constants::exit_codes;
    match err {
        PasteError::InvalidExpiry(_)
        | PasteError::InvalidFormatter(_)
        | PasteError::InvalidKeyEncoding(_) => exit_codes::INVALID_INPUT,
        PasteError::Transport(_) => exit_codes::TRANSPORT_FAILED,
        PasteError::MalformedResponse(_) => exit_codes::SERVER_ERROR,
        _ => 1,
    }
}

/// Pick the process exit code for an error returned by `run`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(paste_err) = err.downcast_ref::<PasteError>() {
        return paste_exit_code(paste_err);
    }
    1
}
