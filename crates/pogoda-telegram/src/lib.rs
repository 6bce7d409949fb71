//! pogoda-telegram: Telegram frontend for pogoda-bot
//!
//! Long-polls for updates and answers every message whose lower-cased
//! text equals the trigger word with a current weather report.

pub mod bot;
pub mod error;
pub mod handler;

pub use bot::{WeatherBot, TRIGGER_WORD};
pub use error::{Result, TelegramError};
pub use handler::BotState;
