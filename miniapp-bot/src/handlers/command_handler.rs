//! Answers one named command with its canned reply; ignores everything else.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::commands::Command;
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies;

/// Sends the reply for `command` when the message text is that command.
pub struct CommandHandler {
    command: Command,
    bot: Arc<dyn Bot>,
    mini_app_url: Url,
    /// Own username, filled from getMe at startup; used to check `/cmd@username`.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        command: Command,
        bot: Arc<dyn Bot>,
        mini_app_url: Url,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            command,
            bot,
            mini_app_url,
            bot_username,
        }
    }

    async fn matches(&self, text: &str) -> bool {
        let username = self.bot_username.read().await;
        Command::from_text(text, username.as_deref()) == Some(self.command)
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(command = self.command.name()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.matches(&message.content).await {
            return Ok(HandlerResponse::Ignore);
        }

        let reply = replies::for_command(self.command, &self.mini_app_url);
        self.bot.reply_to(message, &reply).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = self.command.name(),
            "Sent command reply"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
