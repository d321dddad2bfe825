//! Handlers in the bot's chain: logging, then the rate handler that answers.

mod logging_handler;
mod rate_handler;

pub use logging_handler::LoggingHandler;
pub use rate_handler::RateHandler;
