//! Archive endpoint settings: ARCHIVE_API_URL (required), ARCHIVE_TIMEOUT_SECS, ARCHIVE_MAX_RETRIES.

use anyhow::Result;
use rate_archive::RetryPolicy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// ARCHIVE_API_URL, including its query string; `&date=DD.MM.YYYY` is appended per request
    pub api_url: String,
    /// Per-attempt timeout
    pub timeout_secs: u64,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
}

/// Numeric setting: `default` when unset or blank, an error when set but not a number.
fn env_number<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} is not a valid number: {}", name, value)),
        _ => Ok(default),
    }
}

impl ArchiveConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("ARCHIVE_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("ARCHIVE_API_URL not set"))?;
        let timeout_secs = env_number("ARCHIVE_TIMEOUT_SECS", 10)?;
        let max_retries = env_number("ARCHIVE_MAX_RETRIES", 1)?;

        Ok(Self {
            api_url,
            timeout_secs,
            max_retries,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("ARCHIVE_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("ARCHIVE_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            ..RetryPolicy::default()
        }
    }
}
