//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; ratebot-telegram implements it via teloxide.

use crate::error::{BotError, Result};
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Sends replies to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a rendered reply: quotes `reply.reply_to` when set and attaches the quick-reply menu when `reply.show_menu` is true.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::InvalidMessageId(s.to_string()))
}
