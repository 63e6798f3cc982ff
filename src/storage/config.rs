//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Every field has
//! a default, so a missing file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "homeroom-storage";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeroomConfig {
    /// Snapshot storage settings
    #[serde(default)]
    pub storage: StorageSettings,
    /// OS appearance settings
    #[serde(default)]
    pub appearance: AppearanceSettings,
}

/// Where the state snapshot lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Fixed key the snapshot is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Directory override; the platform data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            dir: None,
        }
    }
}

impl StorageSettings {
    /// Directory holding the snapshot file.
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(get_data_dir)
    }
}

/// OS appearance tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Follow the OS light/dark setting
    #[serde(default = "default_follow_system")]
    pub follow_system: bool,
    /// How often the OS setting is polled, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_follow_system() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            follow_system: default_follow_system(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "homeroom", "Homeroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<HomeroomConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Save application configuration to the default location.
pub fn save_config(config: &HomeroomConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Load configuration from `path`; defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<HomeroomConfig, ConfigError> {
    if !path.exists() {
        return Ok(HomeroomConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &HomeroomConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
