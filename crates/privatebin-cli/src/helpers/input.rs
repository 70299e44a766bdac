//! Reading the paste text and the optional password.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::SecretString;

use crate::errors::CliError;

static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{1B}\x{9B}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x{07})|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))",
    )
    .expect("ANSI escape pattern is valid")
});

/// Remove terminal colour and cursor escape sequences.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Read the paste text from the positional argument, or from stdin when it
/// is piped.
pub fn read_paste_text(arg: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = arg {
        return clean_text(text.to_string());
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(no_text());
    }
    text_from_reader(stdin.lock())
}

fn text_from_reader(mut reader: impl Read) -> anyhow::Result<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    clean_text(buffer)
}

fn clean_text(text: String) -> anyhow::Result<String> {
    let text = strip_ansi(&text);
    if text.is_empty() {
        return Err(no_text());
    }
    Ok(text)
}

fn no_text() -> anyhow::Error {
    CliError::invalid_input("No text supplied. Pass it as an argument or pipe it on stdin.").into()
}

/// Pick the paste password from an interactive prompt when `ask` is set,
/// otherwise from `--password`/PRIVATEBIN_PASSWORD. An empty password means
/// none.
pub fn resolve_password(
    flag: Option<&str>,
    ask: bool,
) -> anyhow::Result<Option<SecretString>> {
    if ask {
        if !io::stdin().is_terminal() {
            return Err(CliError::invalid_input(
                "--ask-password needs a terminal. Use --password or PRIVATEBIN_PASSWORD instead.",
            )
            .into());
        }
        let password = Password::new()
            .with_prompt("Paste password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
        return Ok(non_empty(password));
    }
    Ok(flag.map(str::to_string).and_then(non_empty))
}

fn non_empty(password: String) -> Option<SecretString> {
    if password.is_empty() {
        None
    } else {
        Some(SecretString::from(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    use crate::constants::exit_codes;
    use crate::errors::exit_code_for;

    #[test]
    fn test_strip_ansi_colours() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m plain"), "red plain");
        assert_eq!(strip_ansi("\x1b[1;32mbold green\x1b[m"), "bold green");
        assert_eq!(strip_ansi("no escapes here"), "no escapes here");
    }

    #[test]
    fn test_stdin_trailing_newline_removed_once() {
        let text = text_from_reader("line one\nline two\n\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_stdin_without_newline_kept() {
        let text = text_from_reader("  spaced  ".as_bytes()).unwrap();
        assert_eq!(text, "  spaced  ");
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = text_from_reader("\n".as_bytes()).unwrap_err();
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
        assert!(err.to_string().starts_with("No text supplied"));

        let err = read_paste_text(Some("")).unwrap_err();
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = read_paste_text(Some("\x1b[0m")).unwrap_err();
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_argument_used_verbatim() {
        assert_eq!(
            read_paste_text(Some("keep\ttabs\n")).unwrap(),
            "keep\ttabs\n"
        );
    }

    #[test]
    fn test_password_from_flag() {
        let password = resolve_password(Some("hunter2"), false).unwrap();
        assert_eq!(password.unwrap().expose_secret(), "hunter2");
        assert!(resolve_password(Some(""), false).unwrap().is_none());
        assert!(resolve_password(None, false).unwrap().is_none());
    }
}
