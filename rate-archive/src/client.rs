//! HTTP client for the archive endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::ArchiveError;
use crate::model::{format_archive_date, ArchiveResponse, ExchangeRate};
use crate::Currency;

/// Rate lookup seam. The bot depends on this trait; tests substitute a mock.
#[async_trait]
pub trait RateArchive: Send + Sync {
    /// Rate of `currency` on `date`, `Ok(None)` when the archive has no record for it.
    async fn lookup(
        &self,
        currency: Currency,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRate>, ArchiveError>;
}

/// Timeout per attempt and how many extra attempts a retryable failure gets.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

/// reqwest-based [`RateArchive`].
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
    policy: RetryPolicy,
}

impl ArchiveClient {
    /// Creates a client with the default [`RetryPolicy`].
    ///
    /// `base_url` already carries its query string (e.g. `...exchange_rates?json`); the date is appended as `&date=`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ArchiveError> {
        Self::with_policy(base_url, RetryPolicy::default())
    }

    pub fn with_policy(base_url: impl Into<String>, policy: RetryPolicy) -> Result<Self, ArchiveError> {
        let client = Client::builder().timeout(policy.timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Full request URL for `date`.
    pub fn request_url(&self, date: NaiveDate) -> String {
        format!("{}&date={}", self.base_url, format_archive_date(date))
    }

    /// Downloads and parses the archive for `date`, retrying retryable failures per the policy.
    #[instrument(skip(self))]
    pub async fn fetch_archive(&self, date: NaiveDate) -> Result<ArchiveResponse, ArchiveError> {
        let url = self.request_url(date);
        let mut attempt = 0;

        let body = loop {
            match self.fetch_once(&url).await {
                Ok(body) => break body,
                Err(e) if e.is_retryable() && attempt < self.policy.max_retries => {
                    attempt += 1;
                    warn!(attempt = attempt, error = %e, url = %url, "Archive request failed, retrying");
                    tokio::time::sleep(self.policy.backoff).await;
                }
                Err(e) => return Err(e),
            }
        };

        let response: ArchiveResponse = serde_json::from_str(&body)?;
        debug!(
            date = ?response.date,
            records = response.records().len(),
            "Archive response parsed"
        );
        Ok(response)
    }

    async fn fetch_once(&self, url: &str) -> Result<String, ArchiveError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ArchiveError::Status(status));
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl RateArchive for ArchiveClient {
    async fn lookup(
        &self,
        currency: Currency,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRate>, ArchiveError> {
        let response = self.fetch_archive(date).await?;
        let rate = response.find(currency);
        info!(
            currency = %currency,
            date = %date,
            found = rate.is_some(),
            "step: archive lookup done"
        );
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_appends_date() {
        let client = ArchiveClient::new("https://api.privatbank.ua/p24api/exchange_rates?json").unwrap();
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(
            client.request_url(date),
            "https://api.privatbank.ua/p24api/exchange_rates?json&date=01.01.2021"
        );
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.max_retries, 1);
    }
}
