//! Handler that logs each incoming message and the chain's final response.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info};

/// Logs in before() and after(); never stops the chain.
#[derive(Clone, Default)]
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("-"),
            text_len = message.content.chars().count(),
            "Incoming message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(user_id = message.user.id, response = ?response, "Message handled");
        Ok(())
    }
}
