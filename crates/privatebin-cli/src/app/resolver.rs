//! Config file resolution.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, read_config, PrivatebinConfig};
use crate::constants::LOCAL_CONFIG_FILE;
use crate::errors::CliError;

/// Where a config file path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named by `--config` or `PRIVATEBIN_CONFIG`; must exist.
    Explicit(PathBuf),
    /// One of the default locations; may be absent.
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => path,
        }
    }
}

/// Resolve the config file path from `--config`, the PRIVATEBIN_CONFIG env
/// var, the working directory and finally the XDG config directory.
pub fn resolve_config_path(flag: Option<&Path>) -> anyhow::Result<ConfigLocation> {
    pick_config_path(
        flag,
        std::env::var("PRIVATEBIN_CONFIG").ok(),
        Path::new(LOCAL_CONFIG_FILE),
        default_config_path,
    )
}

fn pick_config_path(
    flag: Option<&Path>,
    env_value: Option<String>,
    local: &Path,
    fallback: impl FnOnce() -> anyhow::Result<PathBuf>,
) -> anyhow::Result<ConfigLocation> {
    if let Some(path) = flag {
        return Ok(ConfigLocation::Explicit(path.to_path_buf()));
    }
    if let Some(value) = env_value {
        if !value.trim().is_empty() {
            return Ok(ConfigLocation::Explicit(PathBuf::from(value)));
        }
    }
    if local.is_file() {
        return Ok(ConfigLocation::Default(local.to_path_buf()));
    }
    Ok(ConfigLocation::Default(fallback()?))
}

/// Load the config the resolved location points at.
///
/// A missing default file yields an empty config; a missing explicit file is
/// a not-found error.
pub fn load_config(location: &ConfigLocation) -> anyhow::Result<PrivatebinConfig> {
    let path = location.path();
    if !path.exists() {
        return match location {
            ConfigLocation::Explicit(_) => Err(CliError::not_found(
                format!("No config file found at {}", path.display()),
                "Create it or drop --config / PRIVATEBIN_CONFIG to use the defaults.",
            )
            .into()),
            ConfigLocation::Default(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(PrivatebinConfig::default())
            }
        };
    }
    tracing::debug!(path = %path.display(), "reading config file");
    read_config(path)
}
