//! Application runner: validate config, init logging, build the handler chain, register startup items, poll.

use anyhow::Result;
use reqwest::Url;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::chain::HandlerChain;
use crate::commands::Command;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::{CommandHandler, FallbackHandler, LoggingHandler};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Registration order is the routing order: logging, /start, /menu, /help, then the catch-all fallback.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    mini_app_url: &Url,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));

    let chain = Command::ALL.into_iter().fold(chain, |chain, command| {
        chain.add_handler(Arc::new(CommandHandler::new(
            command,
            bot.clone(),
            mini_app_url.clone(),
            bot_username.clone(),
        )))
    });

    chain.add_handler(Arc::new(FallbackHandler::new(bot, mini_app_url.clone())))
}

/// teloxide Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// setMyCommands / setChatMenuButton as configured. Failures are logged; the bot still starts.
pub async fn register_startup_items(adapter: &TelegramBotAdapter, config: &BotConfig) {
    let mini_app = config.mini_app();

    if mini_app.register_commands {
        match adapter.register_commands().await {
            Ok(()) => info!(count = Command::ALL.len(), "Registered bot commands"),
            Err(e) => warn!(error = %e, "Failed to register bot commands"),
        }
    }

    if mini_app.set_menu_button {
        match adapter
            .set_menu_button(&mini_app.menu_button_text, &mini_app.url)
            .await
        {
            Ok(()) => info!(text = %mini_app.menu_button_text, "Set web app menu button"),
            Err(e) => warn!(error = %e, "Failed to set menu button"),
        }
    }
}

/// Main entry: validate config, init logging, build the chain, then long-poll until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        mini_app_url = %config.mini_app_url(),
        custom_api_url = config.telegram_api_url().is_some(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let adapter = TelegramBotAdapter::new(teloxide_bot.clone());
    register_startup_items(&adapter, &config).await;

    let bot_username = Arc::new(RwLock::new(None));
    let handler_chain = build_handler_chain(
        Arc::new(adapter),
        config.mini_app_url(),
        bot_username.clone(),
    );

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, handler_chain, bot_username).await
}
