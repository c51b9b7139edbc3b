use std::fmt;

use thiserror::Error;

/// Position of one chunk within a multi-part delivery, rendered as `part/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartLabel {
    pub part: usize,
    pub total: usize,
}

impl fmt::Display for PartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.part, self.total)
    }
}

/// Failure reported by a single `sendMessage` call.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Invalid Telegram API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        TransportError::Http(error.to_string())
    }
}

/// Terminal outcome of a failed delivery. Earlier parts may already have
/// reached the chat when a later part fails.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Part {part}/{total} is too large ({length} > {limit} characters)")]
    ChunkTooLarge {
        part: usize,
        total: usize,
        length: usize,
        limit: usize,
    },

    #[error("{}", transport_failure_message(.part, .reason))]
    Transport {
        part: Option<PartLabel>,
        reason: String,
    },
}

fn transport_failure_message(part: &Option<PartLabel>, reason: &str) -> String {
    match part {
        Some(label) => format!("Failed to send part {label}: {reason}"),
        None => format!("Failed to send message: {reason}"),
    }
}

impl DeliveryError {
    /// Part the failure is attributed to, when the delivery was multi-part.
    #[must_use]
    pub fn part(&self) -> Option<PartLabel> {
        match self {
            DeliveryError::EmptyMessage => None,
            DeliveryError::ChunkTooLarge { part, total, .. } => Some(PartLabel {
                part: *part,
                total: *total,
            }),
            DeliveryError::Transport { part, .. } => *part,
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Message too long: {length} characters (max {limit})")]
    PayloadTooLarge { length: usize, limit: usize },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl NotifyError {
    /// HTTP status used when this error is surfaced to the caller.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            NotifyError::ParseError(_) => 400,
            NotifyError::PayloadTooLarge { .. } => 413,
            NotifyError::Unauthorized => 401,
            NotifyError::ConfigError(_) => 500,
            NotifyError::Delivery(DeliveryError::EmptyMessage) => 400,
            NotifyError::Delivery(DeliveryError::ChunkTooLarge { .. }) => 500,
            NotifyError::Delivery(DeliveryError::Transport { .. }) => 502,
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(error: serde_json::Error) -> Self {
        NotifyError::ParseError(error.to_string())
    }
}
