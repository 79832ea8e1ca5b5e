//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.

use crate::core::error::Result;
use crate::core::types::{Chat, Message, Reply};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply with its parse mode and optional web-app button.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;
    /// Answers the given message in the same chat.
    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        self.send_reply(&message.chat, reply).await
    }
}
