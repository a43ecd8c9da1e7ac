//! Reply gateway: the single outbound path. Delivery failures are logged and turned into a
//! `false` return; nothing is retried and no error escapes.

use std::sync::Arc;

use dbot_core::{Bot, Chat, DbotError, DeliveryError, ReplyKeyboard};
use tracing::warn;

use crate::session::UserSession;

pub struct ReplyGateway {
    bot: Arc<dyn Bot>,
}

impl ReplyGateway {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Sends `text` (with `keyboard` when given) to `chat`. Returns whether it was delivered.
    ///
    /// A blocked or unreachable recipient also resets `session`, so the next update starts
    /// from idle instead of continuing a dead conversation.
    pub async fn send(
        &self,
        chat: &Chat,
        session: &mut UserSession,
        text: &str,
        keyboard: Option<&ReplyKeyboard>,
    ) -> bool {
        let result = match keyboard {
            Some(kb) => self.bot.send_message_with_keyboard(chat, text, kb).await,
            None => self.bot.send_message(chat, text).await,
        };

        match result {
            Ok(()) => true,
            Err(DbotError::Delivery(DeliveryError::Blocked(reason))) => {
                warn!(
                    chat_id = chat.id,
                    mode = %session.mode,
                    reason = %reason,
                    "Cannot send message to user (maybe blocked); clearing session"
                );
                session.reset();
                false
            }
            Err(DbotError::Delivery(e)) => {
                warn!(chat_id = chat.id, kind = e.kind(), error = %e, "Message not delivered");
                false
            }
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Unexpected error while sending message");
                false
            }
        }
    }
}
