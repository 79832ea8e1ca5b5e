//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain. Calls getMe first to populate bot_username.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Converts one teloxide message and runs it through the chain. A failed chain is logged, not returned,
/// so polling goes on.
pub async fn handle_update(chain: &HandlerChain, msg: &teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(msg).to_core();
    if let Err(e) = chain.handle(&core_msg).await {
        error!(
            error = %e,
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Handler chain failed"
        );
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// getMe is called before polling and its username written into `bot_username`. Each update is awaited
/// inside the teloxide handler, so shutdown waits for replies already in flight.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; commands with @mention accepted for any name"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            handle_update(&chain, &msg).await;
            Ok(())
        }
    })
    .await;

    info!("Polling stopped");
    Ok(())
}
