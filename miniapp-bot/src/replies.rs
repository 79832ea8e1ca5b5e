//! Canned replies. Pure functions of the Mini App URL; no state.

use reqwest::Url;

use crate::commands::Command;
use crate::core::Reply;

pub const WELCOME_TEXT: &str =
    "👋 Добро пожаловать!\n\nНажмите кнопку ниже, чтобы открыть мини-приложение:";
pub const START_BUTTON_LABEL: &str = "🎮 Открыть Mini App";

pub const MENU_TEXT: &str = "🚀 Запустите мини-приложение:";
pub const MENU_BUTTON_LABEL: &str = "📱 Запустить Mini App";

pub const HELP_TEXT: &str = "🤖 <b>Бот с Mini App</b>\n\n\
Доступные команды:\n\
/start - начать работу с ботом\n\
/menu - показать кнопку Mini App\n\
/help - эта справка\n\n\
Просто нажмите на кнопку, чтобы открыть мини-приложение!";

pub const FALLBACK_TEXT: &str = "Используйте кнопку ниже для открытия мини-приложения:";
pub const FALLBACK_BUTTON_LABEL: &str = "🎯 Открыть Mini App";

/// Welcome text with the launch button.
pub fn start(mini_app_url: &Url) -> Reply {
    Reply::text(WELCOME_TEXT).with_web_app(START_BUTTON_LABEL, mini_app_url.clone())
}

/// Short launch prompt with the button.
pub fn menu(mini_app_url: &Url) -> Reply {
    Reply::text(MENU_TEXT).with_web_app(MENU_BUTTON_LABEL, mini_app_url.clone())
}

/// HTML command listing; no button.
pub fn help() -> Reply {
    Reply::html(HELP_TEXT)
}

/// Answer for anything that is not a known command.
pub fn fallback(mini_app_url: &Url) -> Reply {
    Reply::text(FALLBACK_TEXT).with_web_app(FALLBACK_BUTTON_LABEL, mini_app_url.clone())
}

pub fn for_command(command: Command, mini_app_url: &Url) -> Reply {
    match command {
        Command::Start => start(mini_app_url),
        Command::Menu => menu(mini_app_url),
        Command::Help => help(),
    }
}
