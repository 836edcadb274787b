//! WordPress REST API configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_fields};

/// Posts per page (the REST API caps this at 100).
const fn default_per_page() -> u32 {
    100
}

/// Pause between page requests, in milliseconds.
const fn default_request_delay_ms() -> u64 {
    500
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordPressConfig {
    /// Site root (e.g., `https://example.com`).
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub username: String,

    /// Application password from the user's profile screen.
    #[serde(default)]
    pub app_password: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            app_password: String::new(),
            per_page: default_per_page(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WordPressConfig {
    pub fn is_configured(&self) -> bool {
        self.require().is_ok()
    }

    pub fn require(&self) -> Result<(), ConfigError> {
        require_fields(
            "wordpress",
            &[
                ("base_url", self.base_url.as_str()),
                ("username", self.username.as_str()),
                ("app_password", self.app_password.as_str()),
            ],
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.per_page) {
            return Err(ConfigError::invalid(
                "wordpress.per_page",
                format!("must be between 1 and 100, got {}", self.per_page),
            ));
        }
        Ok(())
    }
}
