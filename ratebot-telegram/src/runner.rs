//! REPL 运行：将 teloxide 消息转为 core::Message 后交给 HandlerChain 处理。
//! 与外部交互：调用 teloxide REPL、get_me 记录 bot 用户名。

use anyhow::Result;
use handler_chain::HandlerChain;
use ratebot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// 使用给定的 teloxide Bot 与 HandlerChain 启动 REPL。
/// 每条消息（包括非文本消息）转为 core::Message，在独立任务中交给 chain.handle。
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.as_deref().unwrap_or("unknown");
            info!(username = %username, "Bot started");
        }
        Err(e) => warn!(error = %e, "getMe failed; starting REPL anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                kind = ?core_msg.kind,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
