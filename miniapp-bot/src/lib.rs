//! # Mini App launcher bot
//!
//! Answers `/start`, `/menu`, `/help` and any other message with a canned reply. Every reply
//! except `/help` carries one inline button that opens the configured Mini App.
//! Core (Handler, Bot, Message, Reply), chain (HandlerChain) and telegram (teloxide glue) are kept apart
//! so routing can be driven without a network.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod handlers;
pub mod replies;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message, ParseMode, Reply,
    Result, ToCoreMessage, ToCoreUser, User, WebAppButton,
};

pub use chain::HandlerChain;
pub use commands::Command;
pub use config::{BaseConfig, BotConfig, MiniAppConfig};
pub use handlers::{CommandHandler, FallbackHandler, LoggingHandler};
pub use runner::{build_handler_chain, build_teloxide_bot, run_bot};
pub use telegram::{
    handle_update, inline_keyboard, run_repl, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper,
};
