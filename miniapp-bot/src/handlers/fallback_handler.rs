//! Catch-all: any message no command handler took gets the launch prompt and button.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies;

/// Always replies. Register last.
pub struct FallbackHandler {
    bot: Arc<dyn Bot>,
    mini_app_url: Url,
}

impl FallbackHandler {
    pub fn new(bot: Arc<dyn Bot>, mini_app_url: Url) -> Self {
        Self { bot, mini_app_url }
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = replies::fallback(&self.mini_app_url);
        self.bot.reply_to(message, &reply).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_type = %message.message_type,
            "Sent fallback reply"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
