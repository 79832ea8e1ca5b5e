//! Mini App config: the URL every launch button opens, plus what to register at startup.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct MiniAppConfig {
    /// MINI_APP_URL. Stored parsed, so a bare host gains a trailing slash
    /// (`https://host` is sent as `https://host/`); both open the same page.
    pub url: Url,
    /// REGISTER_COMMANDS: publish /start, /menu, /help via setMyCommands
    pub register_commands: bool,
    /// SET_MENU_BUTTON: replace the chat menu button with a web-app button
    pub set_menu_button: bool,
    /// MENU_BUTTON_TEXT
    pub menu_button_text: String,
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off` in any case.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    parse_flag(&raw).unwrap_or_else(|| {
        warn!(var = name, value = %raw, default, "Unrecognized boolean, using default");
        default
    })
}

impl MiniAppConfig {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("MINI_APP_URL").context("MINI_APP_URL not set")?;
        let url = Url::parse(raw.trim())
            .with_context(|| format!("MINI_APP_URL is not a valid URL: {}", raw))?;
        let menu_button_text =
            env::var("MENU_BUTTON_TEXT").unwrap_or_else(|_| "Mini App".to_string());

        Ok(Self {
            url,
            register_commands: env_flag("REGISTER_COMMANDS", true),
            set_menu_button: env_flag("SET_MENU_BUTTON", false),
            menu_button_text,
        })
    }

    /// Telegram opens web apps only over HTTPS.
    pub fn validate(&self) -> Result<()> {
        if self.url.scheme() != "https" {
            anyhow::bail!("MINI_APP_URL must use https: {}", self.url);
        }
        if self.set_menu_button && self.menu_button_text.trim().is_empty() {
            anyhow::bail!("MENU_BUTTON_TEXT is empty while SET_MENU_BUTTON is enabled");
        }
        Ok(())
    }
}
