//! Terminal handler: answers through [`Responder`] and sends the reply.

use async_trait::async_trait;
use ratebot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::responder::Responder;

pub struct RateHandler {
    responder: Arc<Responder>,
    bot: Arc<dyn Bot>,
}

impl RateHandler {
    pub fn new(responder: Arc<Responder>, bot: Arc<dyn Bot>) -> Self {
        Self { responder, bot }
    }
}

#[async_trait]
impl Handler for RateHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self.responder.respond(message).await;

        self.bot.send_reply(&message.chat, &reply).await?;
        info!(
            chat_id = message.chat.id,
            show_menu = reply.show_menu,
            reply_len = reply.text.len(),
            "step: reply sent"
        );

        Ok(HandlerResponse::Reply(reply))
    }
}
