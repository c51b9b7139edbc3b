//! Telegram Bot API client
//!
//! Sends one text message per call through `sendMessage`. No retries: a
//! failed call is reported once and the caller decides what happens next.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::models::DeliveryCredentials;
use crate::errors::TransportError;

/// Telegram's hard limit for the text of a single message, in UTF-16 code units.
pub const TELEGRAM_MAX_MESSAGE_LENGTH: usize = 4096;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Single-message send capability consumed by the delivery pipeline.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send `text` as one message. A failure does not guarantee the message
    /// was not delivered.
    async fn send_message(
        &self,
        text: &str,
        credentials: &DeliveryCredentials,
    ) -> Result<(), TransportError>;

    /// Send one part of a split message. Formatting entities may be cut by
    /// the split, so implementations should send parts as plain text.
    async fn send_part(
        &self,
        text: &str,
        credentials: &DeliveryCredentials,
    ) -> Result<(), TransportError> {
        self.send_message(text, credentials).await
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Build the JSON payload for `sendMessage`.
#[must_use]
pub fn build_send_message_payload(chat_id: &str, text: &str, parse_mode: Option<&str>) -> Value {
    let mut payload = json!({
        "chat_id": chat_id,
        "text": text,
    });

    if let Some(mode) = parse_mode {
        payload["parse_mode"] = Value::String(mode.to_string());
        payload["disable_web_page_preview"] = Value::Bool(true);
    }

    payload
}

/// Telegram Bot API client backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
    parse_mode: Option<String>,
}

impl TelegramClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: HTTP_CLIENT.clone(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            parse_mode: None,
        }
    }

    /// Format single messages with `parse_mode`. Parts of a split message
    /// are always sent as plain text.
    #[must_use]
    pub fn with_parse_mode(mut self, parse_mode: Option<String>) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    #[must_use]
    pub fn parse_mode(&self) -> Option<&str> {
        self.parse_mode.as_deref()
    }

    fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, bot_token)
    }

    async fn post_message(
        &self,
        text: &str,
        credentials: &DeliveryCredentials,
        parse_mode: Option<&str>,
    ) -> Result<(), TransportError> {
        let payload = build_send_message_payload(&credentials.chat_id, text, parse_mode);

        // The request URL embeds the bot token; keep it out of error text.
        let resp = self
            .http
            .post(self.send_message_url(&credentials.bot_token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| TransportError::from(e.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::from(e.without_url()))?;

        let parsed: SendMessageResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                warn!("Unparseable sendMessage response: status={}", status);
                return Err(TransportError::InvalidResponse(e.to_string()));
            }
            Err(_) => {
                return Err(TransportError::Api(format!("HTTP {}", status.as_u16())));
            }
        };

        if !parsed.ok {
            let description = parsed
                .description
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!("sendMessage rejected: status={} description={}", status, description);
            return Err(TransportError::Api(description));
        }

        debug!("sendMessage accepted: status={}", status);
        Ok(())
    }
}

#[async_trait]
impl MessageTransport for TelegramClient {
    async fn send_message(
        &self,
        text: &str,
        credentials: &DeliveryCredentials,
    ) -> Result<(), TransportError> {
        self.post_message(text, credentials, self.parse_mode.as_deref())
            .await
    }

    async fn send_part(
        &self,
        text: &str,
        credentials: &DeliveryCredentials,
    ) -> Result<(), TransportError> {
        self.post_message(text, credentials, None).await
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
