//! # ratebot-core
//!
//! Core types and traits for the rate bot: [`Bot`], [`Handler`], message and reply types,
//! and tracing initialization. Transport-agnostic; used by ratebot-telegram, handler-chain and ratebot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageKind, Reply, ToCoreMessage, ToCoreUser, User,
};
