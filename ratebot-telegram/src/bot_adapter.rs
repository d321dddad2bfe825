//! Wraps teloxide::Bot and implements [`ratebot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use ratebot_core::{parse_message_id, Bot as CoreBot, BotError, Chat, Reply, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, MessageId, ReplyParameters};

/// Thin wrapper around teloxide::Bot that implements ratebot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    menu: Vec<Vec<String>>,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot, with no quick-reply menu.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            menu: Vec::new(),
        }
    }

    /// Button labels, one inner vec per keyboard row, shown when a reply asks for the menu.
    pub fn with_menu(mut self, menu: Vec<Vec<String>>) -> Self {
        self.menu = menu;
        self
    }
}

/// Builds the reply keyboard for the given rows of button labels.
pub fn build_menu_markup(menu: &[Vec<String>]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        menu.iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>()),
    )
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(id) = reply.reply_to.as_deref() {
            request = request.reply_parameters(ReplyParameters::new(MessageId(parse_message_id(id)?)));
        }
        if reply.show_menu && !self.menu.is_empty() {
            request = request.reply_markup(build_menu_markup(&self.menu));
        }
        request.await.map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }
}
