//! Data models for the OpenWeatherMap current weather response
//!
//! Every nested object and field deserializes as optional; shape is
//! validated once, when converting into a [`WeatherRecord`]. A payload
//! that misses a field surfaces [`Error::MalformedWeatherData`] instead
//! of panicking.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Raw current weather payload, as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    /// Weather conditions; only the first entry is used
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    /// Temperature, pressure and humidity readings
    pub main: Option<MainReadings>,
    /// Wind readings
    pub wind: Option<WindReadings>,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Short localized condition text
    pub description: Option<String>,
}

/// The `main` object of the payload
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Hectopascals
    pub pressure: Option<f64>,
    /// Percent
    pub humidity: Option<f64>,
}

/// The `wind` object of the payload
#[derive(Debug, Clone, Deserialize)]
pub struct WindReadings {
    /// Meters per second, non-negative
    pub speed: Option<f64>,
    /// Meteorological degrees in [0, 360)
    pub deg: Option<f64>,
}

/// Validated weather snapshot, input to report formatting
///
/// Read-only after construction; created on fetch, consumed once.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Short weather condition text, verbatim from the API
    pub description: String,
    /// Degrees Celsius
    pub temp_min: f64,
    /// Degrees Celsius
    pub temp_max: f64,
    /// Hectopascals
    pub pressure: f64,
    /// Percent
    pub humidity: f64,
    /// Meters per second
    pub wind_speed: f64,
    /// Degrees, 0/360 = north, clockwise
    pub wind_deg: f64,
}

fn missing(field: &str) -> Error {
    Error::MalformedWeatherData(format!("missing field: {}", field))
}

impl TryFrom<WeatherResponse> for WeatherRecord {
    type Error = Error;

    fn try_from(response: WeatherResponse) -> Result<Self> {
        let description = response
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description)
            .ok_or_else(|| missing("weather[0].description"))?;

        let main = response.main.ok_or_else(|| missing("main"))?;
        let wind = response.wind.ok_or_else(|| missing("wind"))?;

        Ok(Self {
            description,
            temp_min: main.temp_min.ok_or_else(|| missing("main.temp_min"))?,
            temp_max: main.temp_max.ok_or_else(|| missing("main.temp_max"))?,
            pressure: main.pressure.ok_or_else(|| missing("main.pressure"))?,
            humidity: main.humidity.ok_or_else(|| missing("main.humidity"))?,
            wind_speed: wind.speed.ok_or_else(|| missing("wind.speed"))?,
            wind_deg: wind.deg.ok_or_else(|| missing("wind.deg"))?,
        })
    }
}
