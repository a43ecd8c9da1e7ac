//! Minimal Telegram config: token and optional API URL. Loaded from env: BOT_TOKEN,
//! BOT_TOKEN_FILE, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::error;

/// Token file read when BOT_TOKEN is unset and BOT_TOKEN_FILE is not given.
pub const DEFAULT_TOKEN_FILE: &str = "token.txt";

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. Token precedence: `token` argument, BOT_TOKEN, then the contents of
    /// BOT_TOKEN_FILE (default `token.txt`).
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token.or_else(|| env::var("BOT_TOKEN").ok()) {
            Some(t) => t,
            None => {
                let path = env::var("BOT_TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string());
                read_token_file(Path::new(&path))?
            }
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; no custom API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Fails when the token is blank or the API URL does not parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at the custom API URL when one is set.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}

fn read_token_file(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).with_context(|| {
        format!(
            "BOT_TOKEN not set and token file {} could not be read",
            path.display()
        )
    })?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// **Test: with_token sets bot_token; telegram_api_url is None.**
    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url_and_blank_token() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        let blank = TelegramConfig::with_token("  ".to_string());
        assert!(blank.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_token_argument_wins_over_env() {
        env::set_var("BOT_TOKEN", "env_token");
        let config = TelegramConfig::from_env(Some("arg_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "arg_token");
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_token_read_from_file() {
        let dir = std::env::temp_dir().join(format!("vocab-token-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("token.txt");
        std::fs::write(&path, "  file_token\n").unwrap();

        env::remove_var("BOT_TOKEN");
        env::set_var("BOT_TOKEN_FILE", &path);
        let config = TelegramConfig::from_env(None).unwrap();
        assert_eq!(config.bot_token, "file_token");

        env::set_var("BOT_TOKEN_FILE", dir.join("missing.txt"));
        assert!(TelegramConfig::from_env(None).is_err());

        env::remove_var("BOT_TOKEN_FILE");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial]
    fn test_api_url_fallback_env() {
        env::remove_var("TELEGRAM_API_URL");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        let config = TelegramConfig::from_env(Some("t".to_string())).unwrap();
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert!(config.validate().is_ok());
        env::remove_var("TELOXIDE_API_URL");
    }
}
