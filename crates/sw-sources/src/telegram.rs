//! Alert sinks.

use async_trait::async_trait;
use serde::Serialize;
use sw_config::TelegramConfig;
use tracing::{info, warn};

use crate::AlertSink;
use crate::error::SourceError;
use crate::http::check_response;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Posts alerts to a Telegram chat through the Bot API.
pub struct TelegramAlertSink {
    http: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramAlertSink {
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] if the bot token or chat id is
    /// missing, or [`SourceError::Http`] if the HTTP client fails to build.
    pub fn new(config: &TelegramConfig) -> Result<Self, SourceError> {
        config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("sitewise/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            send_url: format!(
                "{}/bot{}/sendMessage",
                config.endpoint.trim_end_matches('/'),
                config.bot_token
            ),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Send one Markdown message.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request fails or Telegram rejects it.
    pub async fn send(&self, message: &str) -> Result<(), SourceError> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: message,
            parse_mode: "Markdown",
        };
        let resp = self.http.post(&self.send_url).json(&body).send().await?;
        check_response(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl AlertSink for TelegramAlertSink {
    async fn notify(&self, message: &str) {
        if let Err(e) = self.send(message).await {
            warn!(%e, "alert delivery failed");
        }
    }
}

/// Writes alerts to the log when no chat is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn notify(&self, message: &str) {
        info!(alert = message, "alert");
    }
}
