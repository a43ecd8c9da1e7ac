//! # vocab-bot
//!
//! Application layer of the Korean vocabulary bot: [`BotConfig`] from env, the clap [`Cli`],
//! component assembly and [`run_bot`]. The `add` and `list` maintenance commands work on the
//! store directly, without Telegram.

pub mod cli;
pub mod config;
pub mod maintenance;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, VocabConfig};
pub use maintenance::{add_word, list_words};
pub use runner::{build_components, build_handler_chain, run_bot, BotComponents};
