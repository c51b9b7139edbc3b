use std::env;
use std::time::Duration;

use crate::telegram::{DEFAULT_API_BASE, TELEGRAM_MAX_MESSAGE_LENGTH};

/// Characters reserved below Telegram's ceiling for part headers.
pub const DEFAULT_SAFETY_MARGIN: usize = 200;

/// Pause between consecutive parts of one delivery.
pub const DEFAULT_CHUNK_DELAY_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub notify_api_key: String,
    pub telegram_api_base: String,
    /// Applied to single-message sends only; parts of a split message go
    /// out as plain text since a split can cut through an entity.
    pub telegram_parse_mode: Option<String>,
    pub chunk_safety_margin: usize,
    pub chunk_delay_ms: u64,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|e| format!("TELEGRAM_BOT_TOKEN: {}", e))?,
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
                .map_err(|e| format!("TELEGRAM_CHAT_ID: {}", e))?,
            notify_api_key: env::var("NOTIFY_API_KEY")
                .map_err(|e| format!("NOTIFY_API_KEY: {}", e))?,
            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            telegram_parse_mode: env::var("TELEGRAM_PARSE_MODE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            chunk_safety_margin: parse_optional("CHUNK_SAFETY_MARGIN", DEFAULT_SAFETY_MARGIN)?,
            chunk_delay_ms: parse_optional("CHUNK_DELAY_MS", DEFAULT_CHUNK_DELAY_MS)?,
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        })
    }

    /// Delivery tuning handed to the pipeline for one request.
    #[must_use]
    pub fn delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            max_message_length: TELEGRAM_MAX_MESSAGE_LENGTH,
            safety_margin: self.chunk_safety_margin,
            inter_chunk_delay: Duration::from_millis(self.chunk_delay_ms),
        }
    }
}

fn parse_optional<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: {}", name, e)),
        _ => Ok(default),
    }
}

/// Size and pacing limits for one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySettings {
    /// Hard ceiling of a single transmitted message, in characters.
    pub max_message_length: usize,
    /// Room kept free for the `Part x/y:` header.
    pub safety_margin: usize,
    pub inter_chunk_delay: Duration,
}

impl DeliverySettings {
    /// Largest body a message may have before it is split into parts.
    #[must_use]
    pub fn effective_max_length(&self) -> usize {
        self.max_message_length
            .saturating_sub(self.safety_margin)
            .max(1)
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            max_message_length: TELEGRAM_MAX_MESSAGE_LENGTH,
            safety_margin: DEFAULT_SAFETY_MARGIN,
            inter_chunk_delay: Duration::from_millis(DEFAULT_CHUNK_DELAY_MS),
        }
    }
}
