//! Inbound message type for the core model.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// A single inbound message. `content` is the text or media caption; empty otherwise (stickers, locations, ...).
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// `"text"`, `"caption"` or `"other"`.
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}
