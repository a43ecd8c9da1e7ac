//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Send failures are classified into
//! [`DeliveryError`] kinds so the reply gateway can react to a blocked recipient.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, DeliveryError, ReplyKeyboard, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, ReplyMarkup};
use teloxide::{ApiError, RequestError};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn to_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())));
    let markup = KeyboardMarkup::new(rows);
    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}

/// Maps a Telegram error description to a delivery error kind.
/// Telegram prefixes 403 answers with `Forbidden:` and 400 answers with `Bad Request:`.
fn classify_description(description: String) -> DeliveryError {
    if description.starts_with("Forbidden") {
        DeliveryError::Blocked(description)
    } else if description.starts_with("Bad Request") {
        DeliveryError::BadRequest(description)
    } else {
        DeliveryError::Transport(description)
    }
}

/// Classifies a teloxide request failure for the reply gateway.
pub fn classify_request_error(err: &RequestError) -> DeliveryError {
    let api = match err {
        RequestError::Api(api) => api,
        other => return DeliveryError::Transport(other.to_string()),
    };
    match api {
        ApiError::BotBlocked
        | ApiError::BotKicked
        | ApiError::BotKickedFromSupergroup
        | ApiError::UserDeactivated
        | ApiError::CantInitiateConversation
        | ApiError::CantTalkWithBots
        | ApiError::ChatNotFound => DeliveryError::Blocked(api.to_string()),
        ApiError::MessageIsTooLong
        | ApiError::MessageTextIsEmpty
        | ApiError::CantParseEntities(_) => DeliveryError::BadRequest(api.to_string()),
        other => classify_description(other.to_string()),
    }
}

fn delivery_error(err: RequestError) -> DbotError {
    DbotError::Delivery(classify_request_error(&err))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(delivery_error)?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(ReplyMarkup::Keyboard(to_markup(keyboard)))
            .await
            .map_err(delivery_error)?;
        Ok(())
    }
}
