//! vocab-bot: run the Telegram bot, or add/list words directly in the database.

use anyhow::Result;
use clap::Parser;
use dbot_core::DEFAULT_LOG_FILTER;
use storage::VocabRepository;
use tracing_subscriber::EnvFilter;
use vocab_bot::{add_word, list_words, run_bot, BotConfig, Cli, Commands, VocabConfig};

/// Console-only logging for the maintenance commands.
fn init_console_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn open_store(config: &VocabConfig) -> Result<VocabRepository> {
    config.validate()?;
    Ok(VocabRepository::new(&config.database_url).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Add {
            korean,
            english,
            example,
        } => {
            init_console_tracing();
            let store = open_store(&VocabConfig::from_env()).await?;
            let line = add_word(&store, &korean, &english, &example.join(" ")).await?;
            println!("{}", line);
            Ok(())
        }
        Commands::List { limit } => {
            init_console_tracing();
            let config = VocabConfig::from_env();
            let store = open_store(&config).await?;
            let text = list_words(&store, limit.unwrap_or(config.list_recent_limit)).await?;
            print!("{}", text);
            Ok(())
        }
    }
}
