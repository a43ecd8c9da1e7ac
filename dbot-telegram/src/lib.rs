//! # dbot-telegram
//!
//! Telegram layer: adapters, [`dbot_core::Bot`] implementation with delivery-error
//! classification, minimal config, REPL runner. Handles only Telegram connectivity and
//! handler-chain execution; no vocabulary or session logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{classify_request_error, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_repl;
