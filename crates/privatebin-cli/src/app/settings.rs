//! Effective settings for one invocation: flag > config file > default.

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use privatebin_core::{Expiry, Formatter, PasteOptions};

use crate::cli::{Cli, FormatArg};
use crate::config::PrivatebinConfig;
use crate::constants::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_URL};
use crate::errors::CliError;
use crate::output::OutputMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Instance URL without its trailing slash
    pub base_url: String,
    pub expiry: Expiry,
    pub formatter: Formatter,
    pub burn_after_reading: bool,
    pub output: OutputMode,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &PrivatebinConfig) -> anyhow::Result<Self> {
        let raw_url = cli
            .url
            .as_deref()
            .or(config.url.as_deref())
            .unwrap_or(DEFAULT_URL);
        let base_url = normalize_base_url(raw_url)?;

        let expiry = match (cli.expires, config.expires.as_deref()) {
            (Some(expiry), _) => expiry,
            (None, Some(value)) => value.parse::<Expiry>()?,
            (None, None) => Expiry::default(),
        };

        let formatter = match (cli.format, config.format.as_deref()) {
            (Some(format), _) => format.into(),
            (None, Some(value)) => parse_value::<FormatArg>("format", value)?.into(),
            (None, None) => Formatter::default(),
        };

        let output = match (cli.output, config.output.as_deref()) {
            (Some(output), _) => output,
            (None, Some(value)) => parse_value::<OutputMode>("output", value)?,
            (None, None) => OutputMode::default(),
        };

        let timeout_seconds = cli
            .timeout
            .or(config.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(CliError::invalid_input("Timeout must be at least 1 second").into());
        }

        Ok(Self {
            base_url,
            expiry,
            formatter,
            burn_after_reading: cli.burn || config.burn.unwrap_or(false),
            output,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }

    pub fn paste_options(&self, password: Option<SecretString>) -> PasteOptions {
        let options = PasteOptions::new(self.expiry, self.formatter, self.burn_after_reading);
        match password {
            Some(password) => options.with_password(password),
            None => options,
        }
    }
}

/// Check the instance URL and drop one trailing slash so the server's
/// `/?id` can be appended directly.
fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| CliError::invalid_input(format!("Invalid URL '{}': {}", trimmed, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::invalid_input(format!(
            "Invalid URL '{}': expected an http or https URL",
            trimmed
        ))
        .into());
    }
    Ok(trimmed.strip_suffix('/').unwrap_or(trimmed).to_string())
}

fn parse_value<T: ValueEnum>(key: &str, value: &str) -> anyhow::Result<T> {
    T::from_str(value, true).map_err(|_| {
        let allowed: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        CliError::invalid_input(format!(
            "Invalid {} '{}' in config (expected one of: {})",
            key,
            value,
            allowed.join(", ")
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::constants::exit_codes;
    use crate::errors::exit_code_for;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["privatebin"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&cli(&["x"]), &PrivatebinConfig::default()).unwrap();
        assert_eq!(settings.base_url, "https://privatebin.net");
        assert_eq!(settings.expiry, Expiry::FiveMinutes);
        assert_eq!(settings.formatter, Formatter::PlainText);
        assert!(!settings.burn_after_reading);
        assert_eq!(settings.output, OutputMode::Simple);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = PrivatebinConfig {
            url: Some("https://paste.example.org/".to_string()),
            expires: Some("1day".to_string()),
            burn: Some(true),
            format: Some("syntaxhighlighting".to_string()),
            output: Some("rich".to_string()),
            timeout_seconds: Some(5),
        };
        let settings = Settings::resolve(&cli(&["x"]), &config).unwrap();
        assert_eq!(settings.base_url, "https://paste.example.org");
        assert_eq!(settings.expiry, Expiry::OneDay);
        assert_eq!(settings.formatter, Formatter::SyntaxHighlighting);
        assert!(settings.burn_after_reading);
        assert_eq!(settings.output, OutputMode::Rich);
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_flags_override_config() {
        let config = PrivatebinConfig {
            url: Some("https://config.example".to_string()),
            expires: Some("1day".to_string()),
            format: Some("md".to_string()),
            output: Some("rich".to_string()),
            timeout_seconds: Some(5),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &cli(&[
                "x",
                "--url",
                "http://flag.example",
                "--expires",
                "never",
                "--format",
                "plain",
                "--output",
                "json",
                "--timeout",
                "9",
            ]),
            &config,
        )
        .unwrap();
        assert_eq!(settings.base_url, "http://flag.example");
        assert_eq!(settings.expiry, Expiry::Never);
        assert_eq!(settings.formatter, Formatter::PlainText);
        assert_eq!(settings.output, OutputMode::Json);
        assert_eq!(settings.timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_only_one_trailing_slash_trimmed() {
        assert_eq!(
            normalize_base_url("https://a.example/bin//").unwrap(),
            "https://a.example/bin/"
        );
        assert_eq!(
            normalize_base_url("https://a.example").unwrap(),
            "https://a.example"
        );
    }

    #[test]
    fn test_invalid_values_are_input_errors() {
        let bad_url = Settings::resolve(&cli(&["x", "--url", "not a url"]), &Default::default())
            .unwrap_err();
        assert_eq!(exit_code_for(&bad_url), exit_codes::INVALID_INPUT);

        let ftp = Settings::resolve(&cli(&["x", "--url", "ftp://a.example"]), &Default::default())
            .unwrap_err();
        assert_eq!(exit_code_for(&ftp), exit_codes::INVALID_INPUT);

        let config = PrivatebinConfig {
            expires: Some("2days".to_string()),
            ..Default::default()
        };
        let bad_expiry = Settings::resolve(&cli(&["x"]), &config).unwrap_err();
        assert_eq!(exit_code_for(&bad_expiry), exit_codes::INVALID_INPUT);

        let config = PrivatebinConfig {
            format: Some("html".to_string()),
            ..Default::default()
        };
        let bad_format = Settings::resolve(&cli(&["x"]), &config).unwrap_err();
        assert_eq!(exit_code_for(&bad_format), exit_codes::INVALID_INPUT);
        assert!(bad_format.to_string().contains("plain, code, md"));

        let zero = Settings::resolve(&cli(&["x", "--timeout", "0"]), &Default::default())
            .unwrap_err();
        assert_eq!(exit_code_for(&zero), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_paste_options_carry_settings() {
        let settings = Settings::resolve(
            &cli(&["x", "--expires", "1hour", "-B", "--format", "md"]),
            &Default::default(),
        )
        .unwrap();
        let options = settings.paste_options(Some(SecretString::from("pw".to_string())));
        assert_eq!(options.expiry, Expiry::OneHour);
        assert_eq!(options.formatter, Formatter::Markdown);
        assert!(options.burn_after_reading);
        assert!(options.password.is_some());
    }
}
