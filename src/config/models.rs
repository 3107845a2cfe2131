//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};

/// Default base URL for a locally running detection service
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Detection endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the detection service
    pub base_url: String,
}

impl EndpointConfig {
    /// Environment variable that overrides the configured base URL
    pub const BASE_URL_ENV: &'static str = "TEXTMATCH_API_URL";

    /// Resolve the effective base URL.
    ///
    /// Resolution order: the `TEXTMATCH_API_URL` environment variable if set
    /// and non-empty, otherwise the value from the configuration file. The
    /// returned string is not yet validated as a URL; `DetectionClient::new`
    /// rejects values that do not parse.
    pub fn resolved_base_url(&self) -> String {
        std::env::var(Self::BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Detection endpoint settings
    pub endpoint: EndpointConfig,
    /// User preferences
    pub preferences: UserPreferences,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// User preferences and settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Transport-layer timeout for detection requests in seconds
    pub request_timeout_secs: u64,
}

/// Window state for position and size persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            preferences: UserPreferences::default(),
            window_state: WindowState::default(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 720,
            height: 640,
        }
    }
}
