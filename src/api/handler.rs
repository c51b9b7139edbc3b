//! API Lambda handler - routes monitoring pings and authenticated
//! notifications into the Telegram delivery pipeline.
//!
//! This module handles:
//! - CORS preflight (`OPTIONS`)
//! - Monitoring pings (requests without a body, no auth)
//! - Custom notifications (JSON body with `message` and `key`)

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::{auth, helpers, messages, parsing};
use crate::core::config::AppConfig;
use crate::core::models::DeliveryCredentials;
use crate::errors::NotifyError;
use crate::telegram::{MessageTransport, TelegramClient, deliver, text_length};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error only when configuration cannot be loaded; every request
/// level failure is reported as a JSON response with a matching status code.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let transport = TelegramClient::new(config.telegram_api_base.clone())
        .with_parse_mode(config.telegram_parse_mode.clone());

    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("request", request_id = %request_id);

    Ok(handle_request(&config, &transport, &event.payload, &request_id)
        .instrument(span)
        .await)
}

/// Route one HTTP event and deliver the resulting message through `transport`.
pub async fn handle_request<T>(
    config: &AppConfig,
    transport: &T,
    payload: &Value,
    request_id: &str,
) -> Value
where
    T: MessageTransport + ?Sized,
{
    let origin = config.allowed_origin.as_str();
    let method = parsing::request_method(payload).unwrap_or("GET");
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(method = %method, path = %path, "API Lambda received request");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::preflight(origin);
    }

    let message = match build_message(config, payload) {
        Ok(message) => message,
        Err(e) => {
            warn!("Request rejected: {}", e);
            return helpers::error_to_response(&e, request_id, origin);
        }
    };

    let credentials =
        DeliveryCredentials::new(&config.telegram_bot_token, &config.telegram_chat_id);
    let settings = config.delivery_settings();

    match deliver(&message, &credentials, transport, &settings).await {
        Ok(report) => {
            info!(parts = report.parts_sent, "Notification delivered");
            helpers::ok_delivered(report.parts_sent, request_id, origin)
        }
        Err(e) => {
            error!("Delivery failed: {}", e);
            helpers::error_to_response(&NotifyError::from(e), request_id, origin)
        }
    }
}

// ============================================================================
// Request Classification
// ============================================================================

fn build_message(config: &AppConfig, payload: &Value) -> Result<String, NotifyError> {
    let Some(body) = parsing::extract_body(payload)? else {
        info!("Monitoring ping");
        let details = parsing::ping_details(payload);
        return Ok(messages::format_ping_message(
            &details,
            Utc::now(),
            config.telegram_parse_mode.as_deref(),
        ));
    };

    let request = parsing::parse_notification(&body)?;

    let provided_key = request
        .key
        .as_deref()
        .or_else(|| parsing::request_header(payload, "X-Api-Key"));
    if !auth::verify_api_key(provided_key, &config.notify_api_key) {
        return Err(NotifyError::Unauthorized);
    }

    info!(
        length = text_length(&request.message),
        "Custom notification authorized"
    );
    Ok(request.message)
}
