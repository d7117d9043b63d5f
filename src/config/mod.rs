//! Configuration module for blockscope
//!
//! Holds the explorer backend endpoint and the formatter and logging
//! settings. Configuration is stored in the user's config directory and a
//! default file is written on first run.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081";

const fn default_settle_delay_ms() -> u64 {
    200
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Base URL of the explorer backend
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Quiet period before a hash formatting pass runs
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Write logs to this file (no logging when unset)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Drop search responses that arrive after a newer search was submitted
    #[serde(default)]
    pub ignore_stale_responses: bool,

    /// User-Agent sent to the backend
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            settle_delay_ms: default_settle_delay_ms(),
            log_file: None,
            ignore_stale_responses: false,
            user_agent: None,
        }
    }
}

impl ExplorerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("blockscope").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            tracing::info!(path = %path.display(), "default configuration written");
            return Ok(default_config);
        }

        Self::load_from(path)
    }

    /// Load configuration from an existing file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Settle delay as a duration
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
