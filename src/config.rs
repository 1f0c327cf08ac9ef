//! Application configuration, stored as TOML in the platform data
//! directory.

use crate::audio::AudioConfig;
use crate::position::WatchOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the POI backend
    pub base_url: String,
    /// Preferred track language (BCP-47)
    pub language: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Position watch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSettings {
    /// Platform watch options
    pub watch: WatchOptions,
    /// Replay cadence in milliseconds when replaying a GPX trace
    pub replay_interval_ms: u64,
}

impl Default for PositionSettings {
    fn default() -> Self {
        Self {
            watch: WatchOptions::default(),
            replay_interval_ms: 1_000,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Catalog API settings
    #[serde(default)]
    pub api: ApiSettings,
    /// Position watch settings
    #[serde(default)]
    pub position: PositionSettings,
    /// Audio output settings
    #[serde(default)]
    pub audio: AudioConfig,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "tourcast", "TourCast")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default path. A missing file yields the
/// defaults.
pub fn load_config() -> Result<GuideConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GuideConfig, ConfigError> {
    if !path.exists() {
        return Ok(GuideConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to the default path.
pub fn save_config(config: &GuideConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a specific path.
pub fn save_config_to(config: &GuideConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))
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
