//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vocab-bot")]
#[command(about = "Korean vocabulary Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Add one word to the vocabulary database.
    Add {
        korean: String,
        english: String,
        /// Optional example sentence; remaining words are joined with spaces.
        example: Vec<String>,
    },
    /// Print the most recently added words.
    List {
        /// Number of entries; defaults to LIST_RECENT_LIMIT.
        #[arg(short, long)]
        limit: Option<u32>,
    },
}
