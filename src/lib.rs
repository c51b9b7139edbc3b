//! pingrelay - an HTTP-triggered notifier that relays messages to Telegram.
//!
//! A single API Lambda accepts two kinds of requests:
//! 1. Monitoring pings (no body) that report request metadata to a chat
//! 2. Authenticated custom notifications carrying a JSON `message`
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - reqwest for the Telegram Bot API `sendMessage` call
//! - Tokio for async runtime and inter-part pacing
//!
//! Messages longer than Telegram's limit are split on word boundaries and
//! sent in order as `Part x/y:` messages, one at a time.
//!
//! # Example
//!
//! ```no_run
//! use pingrelay::core::config::DeliverySettings;
//! use pingrelay::core::models::DeliveryCredentials;
//! use pingrelay::telegram::{TelegramClient, deliver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pingrelay::setup_logging();
//!
//!     let client = TelegramClient::default();
//!     let credentials = DeliveryCredentials::new("123456:bot-token", "-1001234567890");
//!
//!     let report = deliver(
//!         "Deployment finished",
//!         &credentials,
//!         &client,
//!         &DeliverySettings::default(),
//!     )
//!     .await?;
//!     println!("Sent {} part(s)", report.parts_sent);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;

pub use errors::{DeliveryError, NotifyError, TransportError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` when set,
/// otherwise `info` (`debug` with the `debug-logs` feature). Calling it more
/// than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// pingrelay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
