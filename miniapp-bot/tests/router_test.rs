//! Routing tests: drive the production handler chain with a recording MockBot.
//!
//! Covers: each named command gets its reply, anything else gets the fallback, exactly one
//! outbound message per inbound message, repeat commands give identical replies, @mentions,
//! transport failures surfacing as errors, and raw Telegram updates (captions, stickers).

mod common;

use std::sync::Arc;

use common::mock_bot::{drain, MockBot};
use common::{create_test_message, CHAT_ID};
use miniapp_bot::{
    build_handler_chain, handle_update, replies, HandlerChain, HandlerResponse, ParseMode,
};
use reqwest::Url;
use serde_json::json;
use tokio::sync::RwLock;

const MINI_APP_URL: &str = "https://rococo-queijadas-04e1fa.netlify.app";

fn mini_app_url() -> Url {
    Url::parse(MINI_APP_URL).unwrap()
}

fn chain_with_username(bot: Arc<MockBot>, username: Option<&str>) -> HandlerChain {
    build_handler_chain(
        bot,
        &mini_app_url(),
        Arc::new(RwLock::new(username.map(str::to_string))),
    )
}

/// **Test: /start → welcome text and exactly one button to the configured URL.**
#[tokio::test]
async fn test_start_sends_welcome_with_button() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);

    let response = chain.handle(&create_test_message("/start")).await.unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, CHAT_ID);
    let reply = &sent[0].reply;
    assert!(reply.text.starts_with("👋 Добро пожаловать!"));
    let button = reply.button.as_ref().expect("start reply has a button");
    assert_eq!(button.label, "🎮 Открыть Mini App");
    assert_eq!(button.url, mini_app_url());
    assert_eq!(response, HandlerResponse::Reply(reply.clone()));
}

/// **Test: /menu → launch prompt and the same target URL.**
#[tokio::test]
async fn test_menu_sends_prompt_with_button() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);

    chain.handle(&create_test_message("/menu")).await.unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply, replies::menu(&mini_app_url()));
    assert_eq!(
        sent[0].reply.button.as_ref().map(|b| b.url.clone()),
        Some(mini_app_url())
    );
}

/// **Test: /help → HTML listing of the three commands, no button.**
#[tokio::test]
async fn test_help_lists_commands() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);

    chain.handle(&create_test_message("/help")).await.unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    let reply = &sent[0].reply;
    assert_eq!(reply.parse_mode, Some(ParseMode::Html));
    assert!(reply.button.is_none());
    for command in ["/start", "/menu", "/help"] {
        assert_eq!(reply.text.matches(command).count(), 1, "{command}");
    }
}

/// **Test: anything that is not a known command → fallback with the button.**
#[tokio::test]
async fn test_other_messages_get_fallback() {
    for text in ["hello", "/unknown", "", "/START", "start", "/start@other_bot"] {
        let (bot, mut rx) = MockBot::with_receiver();
        let chain = chain_with_username(bot, Some("miniappbot"));

        chain.handle(&create_test_message(text)).await.unwrap();

        let sent = drain(&mut rx);
        assert_eq!(sent.len(), 1, "exactly one reply for {text:?}");
        assert_eq!(sent[0].reply, replies::fallback(&mini_app_url()), "{text:?}");
    }
}

/// **Test: a command addressed to this bot by @username is still that command.**
#[tokio::test]
async fn test_command_with_own_mention() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, Some("MiniAppBot"));

    chain
        .handle(&create_test_message("/start@miniappbot"))
        .await
        .unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply, replies::start(&mini_app_url()));
}

/// **Test: deep-link payload after /start does not change the answer.**
#[tokio::test]
async fn test_start_with_payload() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);

    chain
        .handle(&create_test_message("/start campaign_7"))
        .await
        .unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply, replies::start(&mini_app_url()));
}

/// **Test: same command twice → two independent identical replies.**
#[tokio::test]
async fn test_repeat_command_is_idempotent() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);
    let message = create_test_message("/menu");

    let first = chain.handle(&message).await.unwrap();
    let second = chain.handle(&message).await.unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].reply, sent[1].reply);
    assert_eq!(first, second);
}

/// **Test: send failure is returned to the caller; nothing else is sent.**
#[tokio::test]
async fn test_send_failure_propagates() {
    let (bot, mut rx) = MockBot::failing();
    let chain = chain_with_username(bot, None);

    let result = chain.handle(&create_test_message("/start")).await;

    assert!(result.is_err());
    assert!(drain(&mut rx).is_empty());
}

/// **Test: logging + three commands + fallback are registered.**
#[tokio::test]
async fn test_chain_layout() {
    let (bot, _rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);
    assert_eq!(chain.len(), 5);
}

fn telegram_message(body: serde_json::Value) -> teloxide::types::Message {
    let mut value = json!({
        "message_id": 11,
        "date": 1706529600,
        "chat": {"id": CHAT_ID, "type": "private"},
        "from": {"id": 1001, "is_bot": false, "first_name": "Ann"}
    });
    if let (Some(base), Some(extra)) = (value.as_object_mut(), body.as_object()) {
        base.extend(extra.clone());
    }
    serde_json::from_value(value).unwrap()
}

/// **Test: a photo captioned /help is answered with the help text, not the fallback.**
#[tokio::test]
async fn test_captioned_command_is_routed() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, Some("miniappbot"));
    let msg = telegram_message(json!({
        "photo": [{"file_id": "AgAD", "file_unique_id": "AQAD", "width": 90, "height": 90}],
        "caption": "/help"
    }));

    handle_update(&chain, &msg).await;

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply, replies::help());
}

/// **Test: an update with neither text nor caption (a location) gets the fallback.**
#[tokio::test]
async fn test_update_without_text_gets_fallback() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);
    let msg = telegram_message(json!({
        "location": {"latitude": 55.75, "longitude": 37.62}
    }));

    handle_update(&chain, &msg).await;

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply, replies::fallback(&mini_app_url()));
}

/// **Test: handle_update finishes the send before returning; a failed send is logged, not raised.**
#[tokio::test]
async fn test_handle_update_awaits_reply_and_swallows_failure() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = chain_with_username(bot, None);
    handle_update(&chain, &telegram_message(json!({"text": "/menu"}))).await;
    assert_eq!(drain(&mut rx).len(), 1);

    let (bot, mut rx) = MockBot::failing();
    let chain = chain_with_username(bot, None);
    handle_update(&chain, &telegram_message(json!({"text": "/menu"}))).await;
    assert!(drain(&mut rx).is_empty());
}
