//! OpenWeatherMap client

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::models::{WeatherRecord, WeatherResponse};

/// Current weather endpoint
const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The one city this bot reports on
pub const CITY: &str = "moscow";

/// Bound on the single network suspension point per reply
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeatherMap current weather API
///
/// Built once at startup and shared read-only across message handlers.
pub struct WeatherClient {
    client: Client,
    api_key: String,
}

impl WeatherClient {
    /// Create a new client for the fixed city
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        info!("Weather client initialized for city: {}", CITY);

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Fetch and validate the current weather
    pub async fn current(&self) -> Result<WeatherRecord> {
        debug!("Fetching current weather for {}", CITY);

        let response = self
            .client
            .get(WEATHER_URL)
            .query(&[
                ("q", CITY),
                ("appid", self.api_key.as_str()),
                ("lang", "ru"),
                ("units", "metric"),
                ("mode", "json"),
            ])
            .send()
            .await
            .map_err(|e| Error::UpstreamFetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Weather API request failed: {} - {}", status, error_text);
            return Err(Error::UpstreamFetch(format!(
                "Request failed: {} - {}",
                status, error_text
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::UpstreamFetch(e.to_string()))?;

        let payload: WeatherResponse = serde_json::from_str(&text)
            .map_err(|e| Error::MalformedWeatherData(e.to_string()))?;

        WeatherRecord::try_from(payload)
    }
}
