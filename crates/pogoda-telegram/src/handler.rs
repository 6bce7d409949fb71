//! Per-message trigger handling

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info};

use pogoda_core::{format_report, WeatherClient};

use crate::error::{Result, TelegramError};

/// Reply sent when the weather cannot be fetched or parsed
pub const FETCH_FAILED_REPLY: &str =
    "Не удалось получить данные о погоде, попробуйте позже.";

/// Shared read-only state for message handlers
pub struct BotState {
    pub weather: WeatherClient,
}

/// Handle one trigger message: fetch, format, reply in the same chat
///
/// Fetch and shape errors are confined to this message: the user gets a
/// fixed failure reply instead of a report. A failed send surfaces as
/// [`TelegramError::Send`] for the dispatcher to log; it is not retried.
pub async fn handle_trigger(bot: Bot, msg: Message, state: Arc<BotState>) -> Result<()> {
    let chat_id = msg.chat.id;
    info!("Weather trigger in chat {}", chat_id);

    let reply = match state.weather.current().await {
        Ok(record) => format_report(&record),
        Err(e) => {
            error!("Weather report failed for chat {}: {}", chat_id, e);
            FETCH_FAILED_REPLY.to_string()
        }
    };

    bot.send_message(chat_id, reply)
        .await
        .map_err(|e| TelegramError::Send(e.to_string()))?;

    Ok(())
}
