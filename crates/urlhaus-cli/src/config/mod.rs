//! Configuration management.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration, read from `config.toml` in the platform config dir.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Print raw responses by default (as if --raw was passed).
    #[serde(default)]
    pub raw: bool,

    /// Disable emphasis in formatted output.
    #[serde(default)]
    pub no_color: bool,

    /// Override of the API base URL.
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the config file path, if the platform has a config dir.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("ch", "abuse", "urlhaus").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file, or a platform without a config dir, yields defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
