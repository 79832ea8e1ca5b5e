//! BotConfig: BaseConfig + MiniAppConfig. Use load() for env-based loading.

use anyhow::Result;
use reqwest::Url;

use super::{BaseConfig, MiniAppConfig};

/// Bot config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub mini_app: MiniAppConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let mini_app = MiniAppConfig::from_env()?;
        Ok(Self { base, mini_app })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.mini_app.validate()
    }

    pub fn mini_app(&self) -> &MiniAppConfig {
        &self.mini_app
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn mini_app_url(&self) -> &Url {
        &self.mini_app.url
    }
}
