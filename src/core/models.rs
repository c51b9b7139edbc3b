use std::fmt;

use serde::{Deserialize, Serialize};

/// Bot token and destination chat for one delivery. Never logged.
#[derive(Clone)]
pub struct DeliveryCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl DeliveryCredentials {
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }
}

impl fmt::Debug for DeliveryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryCredentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Successful delivery summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub parts_sent: usize,
}

/// JSON body of an authenticated custom notification.
#[derive(Deserialize)]
pub struct NotificationRequest {
    pub message: String,
    #[serde(default)]
    pub key: Option<String>,
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("message_chars", &self.message.chars().count())
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Request metadata reported by a monitoring ping.
#[derive(Debug, Clone, Default)]
pub struct PingDetails {
    pub method: String,
    pub path: String,
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
}
