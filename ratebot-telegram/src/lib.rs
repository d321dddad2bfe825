//! # ratebot-telegram
//!
//! Telegram layer: adapters, [`ratebot_core::Bot`] implementation with the quick-reply menu, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no rate logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_menu_markup, TelegramBotAdapter};
pub use runner::run_repl;
