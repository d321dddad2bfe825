//! Bot configuration: Telegram + logging + templates (BotConfig) and the rate archive (ArchiveConfig). Loaded from env.

mod archive;
mod bot_config;


pub use archive::ArchiveConfig;
pub use bot_config::{messages_file_from_env, BotConfig};
