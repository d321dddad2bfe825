//! Errors raised while delivering a reply to the chat transport.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The transport failed or rejected the outgoing request.
    #[error("Send failed: {0}")]
    Send(String),

    /// A reply-to id that is not a transport message id.
    #[error("Invalid message_id: {0}")]
    InvalidMessageId(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
