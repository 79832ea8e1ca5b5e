//! Bot configuration: BaseConfig (Telegram + log) + MiniAppConfig (what the buttons open).

mod base;
mod bot_config;
mod mini_app;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use mini_app::MiniAppConfig;
