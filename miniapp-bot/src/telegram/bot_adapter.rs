//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use crate::commands::Command;
use crate::core::{Bot as CoreBot, BotError, Chat, ParseMode, Reply, Result, WebAppButton};
use async_trait::async_trait;
use reqwest::Url;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MenuButton, WebAppInfo},
    utils::command::BotCommands,
};

/// One row with one button that opens the web app.
pub fn inline_keyboard(button: &WebAppButton) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::web_app(
        button.label.clone(),
        WebAppInfo {
            url: button.url.clone(),
        },
    )]])
}

fn telegram_parse_mode(mode: ParseMode) -> teloxide::types::ParseMode {
    match mode {
        ParseMode::Html => teloxide::types::ParseMode::Html,
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Publishes the command list shown in the client's command menu (setMyCommands).
    pub async fn register_commands(&self) -> Result<()> {
        self.bot
            .set_my_commands(Command::bot_commands())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Replaces the default chat menu button with one that opens the web app (setChatMenuButton).
    pub async fn set_menu_button(&self, text: &str, url: &Url) -> Result<()> {
        self.bot
            .set_chat_menu_button()
            .menu_button(MenuButton::WebApp {
                text: text.to_string(),
                web_app: WebAppInfo { url: url.clone() },
            })
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(mode) = reply.parse_mode {
            request = request.parse_mode(telegram_parse_mode(mode));
        }
        if let Some(button) = &reply.button {
            request = request.reply_markup(inline_keyboard(button));
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
