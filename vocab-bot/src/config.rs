//! Application config loaded from env. Telegram connectivity lives in [`TelegramConfig`];
//! everything the store and the router need lives in [`VocabConfig`], which the maintenance
//! commands load on its own so they work without a bot token.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use vocab_handlers::VocabHandlerConfig;

pub const DEFAULT_DATABASE_URL: &str = "korean_vocab.db";
pub const DEFAULT_LOG_FILE: &str = "logs/vocab-bot.log";

/// Store location, log file and router limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// QUIZ_POOL_SIZE
    pub quiz_pool_size: u32,
    /// LIST_RECENT_LIMIT
    pub list_recent_limit: u32,
    /// LIST_RANDOM_LIMIT
    pub list_random_limit: u32,
}

impl Default for VocabConfig {
    fn default() -> Self {
        let limits = VocabHandlerConfig::default();
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            quiz_pool_size: limits.quiz_pool_size,
            list_recent_limit: limits.list_recent_limit,
            list_random_limit: limits.list_random_limit,
        }
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl VocabConfig {
    /// Loads from env; unset or unparsable values take their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            quiz_pool_size: env_u32("QUIZ_POOL_SIZE", defaults.quiz_pool_size),
            list_recent_limit: env_u32("LIST_RECENT_LIMIT", defaults.list_recent_limit),
            list_random_limit: env_u32("LIST_RANDOM_LIMIT", defaults.list_random_limit),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is empty");
        }
        for (name, value) in [
            ("QUIZ_POOL_SIZE", self.quiz_pool_size),
            ("LIST_RECENT_LIMIT", self.list_recent_limit),
            ("LIST_RANDOM_LIMIT", self.list_random_limit),
        ] {
            if value == 0 {
                anyhow::bail!("{} must be greater than zero", name);
            }
        }
        Ok(())
    }

    pub fn handler_config(&self) -> VocabHandlerConfig {
        VocabHandlerConfig {
            quiz_pool_size: self.quiz_pool_size,
            list_recent_limit: self.list_recent_limit,
            list_random_limit: self.list_random_limit,
        }
    }
}

/// Full config for running the bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub vocab: VocabConfig,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            vocab: VocabConfig::from_env(),
        })
    }

    /// Fails on a blank token, an invalid API URL or a zero limit.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.vocab.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "BOT_TOKEN",
        "BOT_TOKEN_FILE",
        "DATABASE_URL",
        "LOG_FILE",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "QUIZ_POOL_SIZE",
        "LIST_RECENT_LIMIT",
        "LIST_RANDOM_LIMIT",
    ];

    fn clear_env() {
        for key in VARS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "test_token");
        assert!(config.telegram.telegram_api_url.is_none());
        assert_eq!(config.vocab, VocabConfig::default());
        assert_eq!(config.vocab.database_url, "korean_vocab.db");
        assert_eq!(config.vocab.log_file, "logs/vocab-bot.log");
        assert_eq!(config.vocab.quiz_pool_size, 50);
        assert_eq!(config.vocab.list_recent_limit, 10);
        assert_eq!(config.vocab.list_random_limit, 5);
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("DATABASE_URL", "sqlite:///tmp/custom.db");
        env::set_var("LOG_FILE", "/tmp/vocab.log");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");
        env::set_var("QUIZ_POOL_SIZE", "20");
        env::set_var("LIST_RECENT_LIMIT", " 7 ");
        env::set_var("LIST_RANDOM_LIMIT", "not-a-number");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "custom_token");
        assert_eq!(
            config.telegram.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
        assert_eq!(config.vocab.database_url, "sqlite:///tmp/custom.db");
        assert_eq!(config.vocab.log_file, "/tmp/vocab.log");
        assert_eq!(config.vocab.quiz_pool_size, 20);
        assert_eq!(config.vocab.list_recent_limit, 7);
        assert_eq!(config.vocab.list_random_limit, 5);

        let handler = config.vocab.handler_config();
        assert_eq!(handler.quiz_pool_size, 20);
        assert_eq!(handler.list_recent_limit, 7);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_argument_overrides_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.telegram.bot_token, "cli_token");
        clear_env();
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut vocab = VocabConfig::default();
        vocab.list_random_limit = 0;
        let config = BotConfig {
            telegram: TelegramConfig::with_token("t".to_string()),
            vocab,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("LIST_RANDOM_LIMIT"));
    }

    #[test]
    fn test_validate_rejects_bad_api_url() {
        let mut telegram = TelegramConfig::with_token("t".to_string());
        telegram.telegram_api_url = Some("::not a url::".to_string());
        let config = BotConfig {
            telegram,
            vocab: VocabConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
