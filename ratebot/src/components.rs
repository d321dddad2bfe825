//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use rate_archive::{ArchiveClient, RateArchive};
use ratebot_core::Bot as CoreBot;
use ratebot_telegram::TelegramBotAdapter;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::config::{ArchiveConfig, BotConfig};
use crate::handlers::{LoggingHandler, RateHandler};
use crate::interpreter::menu_rows;
use crate::responder::Responder;
use crate::templates::MessageTemplates;

/// Everything run_bot needs; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot: Arc<dyn CoreBot>,
    pub responder: Arc<Responder>,
}

/// Archive client from config (timeout and retries applied).
pub fn build_archive(config: &ArchiveConfig) -> Result<Arc<dyn RateArchive>> {
    let client = ArchiveClient::with_policy(config.api_url.clone(), config.retry_policy())
        .context("Failed to build archive HTTP client")?;
    Ok(Arc::new(client))
}

/// Templates from MESSAGES_FILE or the built-in set.
pub fn build_templates(messages_file: Option<&str>) -> Result<Arc<MessageTemplates>> {
    let templates = MessageTemplates::load(messages_file).map_err(|e| {
        error!(error = %e, "Failed to load message templates");
        anyhow::anyhow!("Failed to load message templates: {}", e)
    })?;
    Ok(Arc::new(templates))
}

pub fn build_responder(
    archive_config: &ArchiveConfig,
    messages_file: Option<&str>,
) -> Result<Responder> {
    let archive = build_archive(archive_config)?;
    let templates = build_templates(messages_file)?;
    Ok(Responder::new(archive, templates))
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot: Arc<dyn CoreBot> =
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()).with_menu(menu_rows()));
    let responder = Arc::new(build_responder(&config.archive, config.messages_file())?);

    info!(
        archive_url = %config.archive.api_url,
        timeout_secs = config.archive.timeout_secs,
        max_retries = config.archive.max_retries,
        messages_file = ?config.messages_file(),
        "Components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        responder,
    })
}

/// Builds the handler chain (logging → rate handler).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RateHandler::new(
            components.responder.clone(),
            components.bot.clone(),
        )))
}
