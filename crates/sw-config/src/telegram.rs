//! Telegram alerting configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_fields};

fn default_endpoint() -> String {
    "https://api.telegram.org".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,

    #[serde(default)]
    pub chat_id: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

impl TelegramConfig {
    pub fn is_configured(&self) -> bool {
        self.require().is_ok()
    }

    pub fn require(&self) -> Result<(), ConfigError> {
        require_fields(
            "telegram",
            &[("bot_token", self.bot_token.as_str()), ("chat_id", self.chat_id.as_str())],
        )
    }
}
