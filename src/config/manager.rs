//! Configuration manager for loading and saving application configuration
//!
//! Configuration lives in %APPDATA%\TextMatch\config.json (falling back to the
//! working directory when APPDATA is unset). Saves go through a temporary file
//! that is persisted over the target so a crash mid-write cannot leave a
//! truncated config behind.

use crate::config::models::AppConfig;
use crate::error::{Result, TextMatchError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    ///
    /// Returns: %APPDATA%\TextMatch\config.json
    pub fn get_config_path() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("TextMatch").join("config.json")
    }

    /// Ensure the configuration directory exists
    ///
    /// Creates %APPDATA%\TextMatch if it doesn't exist
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path.parent().ok_or_else(|| {
            TextMatchError::ConfigError(crate::error::StringError::new("Invalid config path"))
        })?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default
    /// configuration. A corrupt file is logged but never fatal.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes to a temporary file in the config directory, then persists it
    /// over the target path.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::get_config_path();

        let json = serde_json::to_string_pretty(config)?;

        let mut temp_file = NamedTempFile::new_in(&config_dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file
            .persist(&config_path)
            .map_err(|e| TextMatchError::ConfigError(Box::new(e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
