//! Google Search Console configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_fields};

/// Days of lag before analytics data is considered complete.
const fn default_lag_days() -> u32 {
    3
}

/// Length of each comparison window, in days.
const fn default_window_days() -> u32 {
    28
}

/// Maximum rows requested per query (API maximum).
const fn default_row_limit() -> u32 {
    25_000
}

fn default_endpoint() -> String {
    "https://www.googleapis.com/webmasters/v3".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConsoleConfig {
    /// Property URL as registered in Search Console (e.g., `sc-domain:example.com`).
    #[serde(default)]
    pub site_url: String,

    /// OAuth access token with the `webmasters.readonly` scope.
    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_window_days")]
    pub window_days: u32,

    #[serde(default = "default_lag_days")]
    pub lag_days: u32,

    #[serde(default = "default_row_limit")]
    pub row_limit: u32,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SearchConsoleConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            access_token: String::new(),
            window_days: default_window_days(),
            lag_days: default_lag_days(),
            row_limit: default_row_limit(),
            endpoint: default_endpoint(),
        }
    }
}

impl SearchConsoleConfig {
    pub fn is_configured(&self) -> bool {
        self.require().is_ok()
    }

    /// Fail with the list of missing fields unless queries can be made.
    pub fn require(&self) -> Result<(), ConfigError> {
        require_fields(
            "search_console",
            &[
                ("site_url", self.site_url.as_str()),
                ("access_token", self.access_token.as_str()),
            ],
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::invalid(
                "search_console.window_days",
                "must be at least 1",
            ));
        }
        if self.row_limit == 0 {
            return Err(ConfigError::invalid(
                "search_console.row_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
