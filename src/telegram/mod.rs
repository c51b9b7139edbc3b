//! Telegram delivery: chunking, the Bot API client and the sequential
//! send pipeline

pub mod chunker;
pub mod client;
pub mod delivery;
pub mod format;

pub use chunker::{split_into_chunks, text_length};
pub use client::{
    DEFAULT_API_BASE, MessageTransport, TELEGRAM_MAX_MESSAGE_LENGTH, TelegramClient,
    build_send_message_payload,
};
pub use delivery::{deliver, format_part};
