use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the archive. Distinct from "no data", which is `Ok(None)`.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Archive request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Archive responded with status {0}")]
    Status(StatusCode),

    #[error("Malformed archive response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ArchiveError {
    /// Transport errors, 5xx and 429 may succeed on a second attempt; a body that fails to parse will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ArchiveError::Network(_) => true,
            ArchiveError::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            ArchiveError::Decode(_) => false,
        }
    }
}
