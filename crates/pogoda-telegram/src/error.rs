//! Error types for pogoda-telegram

use thiserror::Error;

/// pogoda-telegram error type
#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Teloxide error: {0}")]
    Teloxide(#[from] teloxide::ApiError),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Reply delivery failed: {0}")]
    Send(String),
}

impl From<teloxide::RequestError> for TelegramError {
    fn from(err: teloxide::RequestError) -> Self {
        match err {
            teloxide::RequestError::Api(api_err) => TelegramError::Teloxide(api_err),
            _ => TelegramError::Request(err.to_string()),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TelegramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_error_maps_to_teloxide_variant() {
        let err: TelegramError =
            teloxide::RequestError::Api(teloxide::ApiError::BotBlocked).into();
        assert!(matches!(err, TelegramError::Teloxide(_)));
    }
}
