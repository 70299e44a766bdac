use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Contents of a `privatebin` config file. Every key is optional; anything
/// left out falls through to the command line defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrivatebinConfig {
    pub url: Option<String>,
    pub expires: Option<String>,
    pub burn: Option<bool>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub timeout_seconds: Option<u64>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<PrivatebinConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<PrivatebinConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("privatebin"));
        }
    }
    Ok(home_dir()?.join(".config").join("privatebin"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
