//! # ratebot
//!
//! Telegram bot for historical UAH/USD and UAH/EUR bank rates. A message is interpreted into
//! a (currency, date) request, looked up in the bank archive, and answered from a template.
//! Transport lives in ratebot-telegram, the archive client in rate-archive.

pub mod cli;
pub mod components;
pub mod config;
pub mod formatter;
pub mod handlers;
pub mod interpreter;
pub mod responder;
pub mod runner;
pub mod templates;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{ArchiveConfig, BotConfig};
pub use formatter::{format_rate, format_reply, Outcome};
pub use handlers::{LoggingHandler, RateHandler};
pub use interpreter::{interpret, menu_rows, CannedPhrase, Interpretation, ParsedRequest, RequestError};
pub use responder::{kyiv_today, Responder};
pub use runner::{answer_once, run_bot};
pub use templates::{MessageTemplates, TemplateKey};
