//! Configuration file management for Folio.
//!
//! Reads `~/.config/folio/config.toml`, then applies environment overrides.

use folio_core::config::FolioConfig;
use folio_core::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ENDPOINT: &str = "FOLIO_AGENT_ENDPOINT";
pub const ENV_API_KEY: &str = "FOLIO_AGENT_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "FOLIO_AGENT_TIMEOUT_SECS";

/// Loads configuration from `path`, or from the default location.
///
/// A missing file yields the defaults. Environment variables win over the
/// file.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let config = read_config_file(&config_path)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Returns the path to the configuration file: ~/.config/folio/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FolioError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("folio").join("config.toml"))
}

fn read_config_file(config_path: &Path) -> Result<FolioConfig> {
    if !config_path.exists() {
        tracing::debug!(
            "[Config] No configuration file at {}, using defaults",
            config_path.display()
        );
        return Ok(FolioConfig::default());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        FolioError::config(format!(
            "Failed to read configuration file at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        FolioError::config(format!(
            "Failed to parse configuration file at {}: {}",
            config_path.display(),
            e
        ))
    })
}

/// Applies `FOLIO_AGENT_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: FolioConfig, lookup: F) -> Result<FolioConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
        config.agent.endpoint = endpoint;
    }
    if let Some(api_key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
        config.agent.api_key = Some(api_key);
    }
    if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
        config.agent.timeout_secs = timeout.trim().parse().map_err(|_| {
            FolioError::config(format!(
                "{} must be a whole number of seconds, got '{}'",
                ENV_TIMEOUT_SECS, timeout
            ))
        })?;
    }
    Ok(config)
}
