//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in %APPDATA%\TextMatch\config.json with atomic writes
//! to prevent corruption. The detection endpoint base URL can be overridden at
//! startup through the `TEXTMATCH_API_URL` environment variable.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, EndpointConfig, UserPreferences, WindowState};
