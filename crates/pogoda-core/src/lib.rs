//! pogoda-core: weather fetching and report formatting for pogoda-bot
//!
//! This crate holds everything that is not Telegram-specific:
//!
//! - Credentials loading from `api_config.json`
//! - A typed OpenWeatherMap client for the current weather of a fixed city
//! - The report module: wind strength bands, compass octants, and the
//!   final Russian weather summary

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use client::WeatherClient;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{WeatherRecord, WeatherResponse};
pub use report::{format_report, CompassOctant, WindStrength};
