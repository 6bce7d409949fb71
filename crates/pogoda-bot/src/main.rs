//! pogoda-bot: Telegram weather bot main binary
//!
//! Reads the API credentials from `api_config.json`, then long-polls
//! Telegram and answers every "погода" message with the current Moscow
//! weather.

use pogoda_core::config::CONFIG_FILE;
use pogoda_core::{Config, WeatherClient};
use pogoda_telegram::WeatherBot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("info".parse()?)
        )
        .init();

    // Load credentials; missing or malformed config is a fatal startup
    // error with a diagnostic on stdout
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            println!("Can't load config: {}", e);
            println!(
                "You need to fill the file \"{}\" with the variable \"weatherApiKey\" \
                 (your api key from openweathermap.org) and the variable \
                 \"telegramApiKey\" (your Telegram bot token)",
                CONFIG_FILE
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Starting pogoda-bot...");

    let weather = WeatherClient::new(&config.weather_api_key)
        .map_err(|e| anyhow::anyhow!("Failed to create weather client: {}", e))?;

    let bot = WeatherBot::new(&config.telegram_api_key, weather);

    bot.start()
        .await
        .map_err(|e| anyhow::anyhow!("Telegram bot error: {}", e))
}
