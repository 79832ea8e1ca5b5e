//! Mock implementation of [`miniapp_bot::Bot`] for integration tests.
//!
//! Records every outbound reply so tests can assert on text and button without hitting Telegram.

use async_trait::async_trait;
use miniapp_bot::{Bot, BotError, Chat, Reply, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded outbound message.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply: Reply,
}

/// Mock Bot that sends each delivered reply as a [`SentRecord`] to the test's receiver.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentRecord>,
    fail: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: false }), sent_rx)
    }

    /// MockBot whose every send fails like a transport error; nothing is recorded.
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: true }), sent_rx)
    }
}

/// Drains everything recorded so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<SentRecord>) -> Vec<SentRecord> {
    let mut records = Vec::new();
    while let Ok(record) = rx.try_recv() {
        records.push(record);
    }
    records
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        if self.fail {
            return Err(BotError::Bot("connection reset".to_string()));
        }
        let _ = self.sent_tx.send(SentRecord {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
