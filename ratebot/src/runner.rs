use anyhow::Result;
use ratebot_core::{init_tracing, Message, MessageKind, User};
use ratebot_telegram::run_repl;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain, build_responder};
use crate::config::{messages_file_from_env, ArchiveConfig, BotConfig};

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        archive_url = %config.archive.api_url,
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(&components);
    let teloxide_bot = components.teloxide_bot.clone();

    run_repl(teloxide_bot, handler_chain).await?;

    Ok(())
}

/// Answers a single message without Telegram, using ARCHIVE_* and MESSAGES_FILE from env.
#[instrument]
pub async fn answer_once(text: &str) -> Result<String> {
    let archive = ArchiveConfig::from_env()?;
    archive.validate()?;
    let responder = build_responder(&archive, messages_file_from_env().as_deref())?;

    let message = Message {
        id: "0".to_string(),
        user: User {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        },
        chat: ratebot_core::Chat {
            id: 0,
            chat_type: "cli".to_string(),
        },
        content: text.to_string(),
        kind: MessageKind::Text,
        created_at: chrono::Utc::now(),
    };

    Ok(responder.respond(&message).await.text)
}
