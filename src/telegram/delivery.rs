//! Sequential multi-part delivery.
//!
//! A message that fits under the effective limit goes out as one plain send.
//! Anything longer is split by [`split_into_chunks`], each part is prefixed
//! with a `Part x/y:` header and sent strictly in order with a fixed pause
//! between sends. The first failed part aborts the delivery.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{error, info, warn};

use super::chunker::{split_into_chunks, text_length};
use super::client::MessageTransport;
use crate::core::config::DeliverySettings;
use crate::core::models::{DeliveryCredentials, DeliveryReport};
use crate::errors::{DeliveryError, PartLabel};

/// Text sent for one part of a multi-part delivery.
#[must_use]
pub fn format_part(part: usize, total: usize, content: &str) -> String {
    if total > 1 {
        format!("Part {part}/{total}:\n\n{content}")
    } else {
        content.to_string()
    }
}

/// Deliver `message` through `transport`, splitting it when it exceeds
/// `settings.effective_max_length()`.
///
/// # Errors
///
/// - [`DeliveryError::EmptyMessage`] when the trimmed message is empty; the
///   transport is never called.
/// - [`DeliveryError::ChunkTooLarge`] when a header-decorated part would exceed
///   `settings.max_message_length`; that part is not sent.
/// - [`DeliveryError::Transport`] on the first failed send. Parts before it
///   have already been delivered; nothing after it is sent.
#[tracing::instrument(level = "info", skip_all)]
pub async fn deliver<T>(
    message: &str,
    credentials: &DeliveryCredentials,
    transport: &T,
    settings: &DeliverySettings,
) -> Result<DeliveryReport, DeliveryError>
where
    T: MessageTransport + ?Sized,
{
    let trimmed = message.trim();
    if trimmed.is_empty() {
        warn!("Rejected empty message");
        return Err(DeliveryError::EmptyMessage);
    }

    let effective_max = settings.effective_max_length();
    let length = text_length(trimmed);

    if length <= effective_max {
        info!(length, "Sending single message");
        return match send_guarded(transport, trimmed, credentials, false).await {
            Ok(()) => Ok(DeliveryReport { parts_sent: 1 }),
            Err(reason) => {
                error!("Failed to send message: {}", reason);
                Err(DeliveryError::Transport { part: None, reason })
            }
        };
    }

    let chunks = split_into_chunks(trimmed, effective_max);
    let total = chunks.len();
    info!(length, parts = total, "Message exceeds limit, sending in parts");

    for (idx, chunk) in chunks.iter().enumerate() {
        let part = idx + 1;
        let text = format_part(part, total, chunk);

        let text_len = text_length(&text);
        if text_len > settings.max_message_length {
            error!(part, total, length = text_len, "Part exceeds message limit");
            return Err(DeliveryError::ChunkTooLarge {
                part,
                total,
                length: text_len,
                limit: settings.max_message_length,
            });
        }

        if let Err(reason) = send_guarded(transport, &text, credentials, true).await {
            error!(part, total, "Failed to send part: {}", reason);
            return Err(DeliveryError::Transport {
                part: Some(PartLabel { part, total }),
                reason,
            });
        }

        info!(part, total, "Sent part");

        if part < total && !settings.inter_chunk_delay.is_zero() {
            tokio::time::sleep(settings.inter_chunk_delay).await;
        }
    }

    Ok(DeliveryReport { parts_sent: total })
}

/// One transport call; a panic inside the transport becomes an error string.
/// Parts of a split message go through `send_part`.
async fn send_guarded<T>(
    transport: &T,
    text: &str,
    credentials: &DeliveryCredentials,
    is_part: bool,
) -> Result<(), String>
where
    T: MessageTransport + ?Sized,
{
    let send = if is_part {
        transport.send_part(text, credentials)
    } else {
        transport.send_message(text, credentials)
    };

    match AssertUnwindSafe(send).catch_unwind().await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("unexpected error while sending message".to_string()),
    }
}
