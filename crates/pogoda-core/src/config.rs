//! Credentials loading
//!
//! The bot reads a single JSON file once at startup. A missing or
//! unparseable file is fatal; the binary prints a diagnostic and exits.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Default credentials file, relative to the working directory
pub const CONFIG_FILE: &str = "api_config.json";

/// API credentials for the two external services
///
/// Key names in the file are exactly `weatherApiKey` and `telegramApiKey`.
/// The config is read-only after startup and shared by value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// OpenWeatherMap API key
    pub weather_api_key: String,
    /// Telegram bot token
    pub telegram_api_key: String,
}

impl Config {
    /// Load credentials from the default `api_config.json`
    pub fn load() -> Result<Self> {
        Self::from_json_file(CONFIG_FILE)
    }

    /// Load credentials from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse credentials from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config JSON: {}", e)))?;

        // A key that is present but blank cannot authenticate anyway
        if config.weather_api_key.is_empty() {
            return Err(Error::Config("weatherApiKey is empty".to_string()));
        }
        if config.telegram_api_key.is_empty() {
            return Err(Error::Config("telegramApiKey is empty".to_string()));
        }

        Ok(config)
    }
}
