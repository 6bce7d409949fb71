//! Error types for pogoda-core

use thiserror::Error;

/// Main error type for pogoda-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Weather API request failed: {0}")]
    UpstreamFetch(String),

    #[error("Malformed weather data: {0}")]
    MalformedWeatherData(String),
}

/// Result type alias for pogoda-core
pub type Result<T> = std::result::Result<T, Error>;
