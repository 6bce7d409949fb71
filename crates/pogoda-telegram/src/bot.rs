//! Telegram bot implementation

use std::sync::Arc;

use teloxide::{dispatching::UpdateFilterExt, prelude::*};
use tracing::info;

use pogoda_core::WeatherClient;

use crate::error::Result;
use crate::handler::{handle_trigger, BotState};

/// The single literal that makes the bot respond
pub const TRIGGER_WORD: &str = "погода";

/// Whether a message text triggers a weather reply
///
/// Lower-cased exact match; "погода сегодня" does not count.
#[must_use]
pub fn is_trigger(text: &str) -> bool {
    text.to_lowercase() == TRIGGER_WORD
}

/// Telegram bot wrapper
pub struct WeatherBot {
    bot: Bot,
    state: Arc<BotState>,
}

impl WeatherBot {
    /// Create a new Telegram bot
    pub fn new(token: &str, weather: WeatherClient) -> Self {
        let bot = Bot::new(token);
        let state = Arc::new(BotState { weather });

        Self { bot, state }
    }

    /// Start long polling
    ///
    /// Each matching update is handled as an independent task; a failed
    /// reply is logged by the dispatcher and never takes the loop down.
    pub async fn start(self) -> Result<()> {
        let me = self.bot.get_me().await?;
        info!("Authorized on account {}", me.username());

        let trigger_handler = Update::filter_message()
            .filter(|msg: Message| msg.text().map(is_trigger).unwrap_or(false))
            .endpoint(handle_trigger);

        Dispatcher::builder(self.bot, trigger_handler)
            .dependencies(dptree::deps![self.state])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
