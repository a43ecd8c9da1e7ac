use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use storage::{VocabRepository, VocabStore};
use tracing::{info, instrument};
use vocab_handlers::{LoggingHandler, SessionRegistry, VocabHandler};

use crate::config::{BotConfig, VocabConfig};

/// Everything the REPL needs, built from config and an outbound bot.
#[derive(Clone)]
pub struct BotComponents {
    pub store: Arc<VocabRepository>,
    pub sessions: SessionRegistry,
    pub handler_chain: HandlerChain,
}

/// Logging first, then the vocabulary router.
pub fn build_handler_chain(handler: Arc<VocabHandler>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(handler)
}

/// Opens the store (creating the table if needed) and wires the router to `bot`.
#[instrument(skip(config, bot))]
pub async fn build_components(config: &VocabConfig, bot: Arc<dyn Bot>) -> Result<BotComponents> {
    let store = Arc::new(
        VocabRepository::new(&config.database_url)
            .await
            .with_context(|| format!("Open vocabulary database {}", config.database_url))?,
    );
    let sessions = SessionRegistry::new();
    let handler = Arc::new(VocabHandler::new(
        store.clone() as Arc<dyn VocabStore>,
        bot,
        sessions.clone(),
        config.handler_config(),
    ));

    Ok(BotComponents {
        store,
        sessions,
        handler_chain: build_handler_chain(handler),
    })
}

/// Main entry: validate config, init logging, build components, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.vocab.log_file)?;

    info!(
        database_url = %config.vocab.database_url,
        quiz_pool_size = config.vocab.quiz_pool_size,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot();
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let components = build_components(&config.vocab, adapter).await?;

    let words = components.store.count().await.unwrap_or_default();
    info!(words, "Bot started successfully");

    run_repl(teloxide_bot, components.handler_chain).await
}
