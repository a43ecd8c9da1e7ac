//! # dbot-core
//!
//! Core types and traits for the vocabulary bot: [`Bot`], [`Handler`], message and user types,
//! reply keyboards, error types, and tracing initialization. Transport-agnostic; used by
//! dbot-telegram, handler-chain and vocab-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, ReplyKeyboard};
pub use error::{DbotError, DeliveryError, Result};
pub use logger::{init_tracing, DEFAULT_LOG_FILTER};
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
