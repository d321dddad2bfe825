//! Adapters from Telegram (teloxide) types to ratebot_core types.

use ratebot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, kind) = match self.0.text() {
            Some(text) => (text.to_string(), MessageKind::Text),
            None => (String::new(), MessageKind::Other(self.media_name().to_string())),
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content,
            kind,
            created_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Short name of a non-text payload, for logs.
    fn media_name(&self) -> &'static str {
        let msg = self.0;
        if msg.sticker().is_some() {
            "sticker"
        } else if msg.photo().is_some() {
            "photo"
        } else if msg.animation().is_some() {
            "animation"
        } else if msg.video().is_some() {
            "video"
        } else if msg.voice().is_some() {
            "voice"
        } else if msg.document().is_some() {
            "document"
        } else {
            "other"
        }
    }
}
