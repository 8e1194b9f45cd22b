use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::Panel;
use crate::widgets::ShoveSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find a config directory")]
    NoConfigDir,
    #[error("could not find a cache directory")]
    NoCacheDir,
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Question bank to open when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_path: Option<PathBuf>,

    /// Panel shown when the workbench starts
    #[serde(default)]
    pub start_panel: Panel,

    #[serde(default)]
    pub shove_box: ShoveSettings,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("quizbench");
        Ok(config_dir.join("config.toml"))
    }

    /// Where the interactive workbench writes its log
    pub fn log_path() -> Result<PathBuf, ConfigError> {
        let cache_dir = dirs::cache_dir()
            .ok_or(ConfigError::NoCacheDir)?
            .join("quizbench");
        Ok(cache_dir.join("quizbench.log"))
    }

    /// Load config from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("{}", e);
                return AppConfig::default();
            }
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return AppConfig::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "{}", e);
                AppConfig::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
