//! BotConfig: Telegram connection, logging, templates, plus [`ArchiveConfig`]. Use load() for env-based loading.

use anyhow::Result;
use std::env;

use super::ArchiveConfig;

/// Full bot config. BOT_TOKEN and ARCHIVE_API_URL are required; the rest has defaults.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// MESSAGES_FILE; built-in templates when unset
    pub messages_file: Option<String>,
    pub archive: ArchiveConfig,
}

/// MESSAGES_FILE, if set and non-empty.
pub fn messages_file_from_env() -> Option<String> {
    env::var("MESSAGES_FILE").ok().filter(|s| !s.trim().is_empty())
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/ratebot.log".to_string());
        let archive = ArchiveConfig::from_env()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            messages_file: messages_file_from_env(),
            archive,
        })
    }

    /// Validate config (URLs must parse, timeout must be positive).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.archive.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_deref()
    }
    pub fn messages_file(&self) -> Option<&str> {
        self.messages_file.as_deref()
    }
}
