//! Core types and traits: Handler, Bot, Message, Reply, HandlerResponse, error, logger.
//! Transport-agnostic; the teloxide side lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ParseMode, Reply, ToCoreMessage, ToCoreUser, User,
    WebAppButton,
};
