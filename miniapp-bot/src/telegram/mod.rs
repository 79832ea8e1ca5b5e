//! Telegram framework layer: adapters, Bot implementation, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{inline_keyboard, TelegramBotAdapter};
pub use runner::{handle_update, run_repl};
