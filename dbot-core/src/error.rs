//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`DeliveryError`] classifies outbound send failures.

use thiserror::Error;

/// Top-level error for handlers: a store fault or a failed send.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Why an outbound message did not reach the recipient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Recipient blocked the bot, was deactivated, or the chat is gone.
    #[error("recipient unreachable: {0}")]
    Blocked(String),

    /// The request itself was rejected (text too long, empty, bad entities).
    #[error("malformed request: {0}")]
    BadRequest(String),

    /// Network, rate limiting, or any other transport failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl DeliveryError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryError::Blocked(_) => "blocked",
            DeliveryError::BadRequest(_) => "bad_request",
            DeliveryError::Transport(_) => "transport",
        }
    }
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_kind() {
        assert_eq!(DeliveryError::Blocked("x".into()).kind(), "blocked");
        assert_eq!(DeliveryError::BadRequest("x".into()).kind(), "bad_request");
        assert_eq!(DeliveryError::Transport("x".into()).kind(), "transport");
    }

    #[test]
    fn test_delivery_error_converts_into_dbot_error() {
        let err: DbotError = DeliveryError::Blocked("bot was blocked by the user".into()).into();
        assert!(matches!(err, DbotError::Delivery(DeliveryError::Blocked(_))));
        assert_eq!(
            err.to_string(),
            "Delivery error: recipient unreachable: bot was blocked by the user"
        );
    }
}
