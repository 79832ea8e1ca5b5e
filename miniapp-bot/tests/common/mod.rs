//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use miniapp_bot::{Chat, Message, User};

pub const CHAT_ID: i64 = 456;

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat { id: CHAT_ID },
        message_type: if content.is_empty() { "other" } else { "text" }.to_string(),
        created_at: Utc::now(),
    }
}
