//! Response envelope builders for the Lambda HTTP integration.
//!
//! Every response carries the CORS headers so browser callers can read
//! error bodies as well as successes.

use serde_json::{Value, json};

use crate::errors::NotifyError;

// ============================================================================
// Headers
// ============================================================================

#[must_use]
pub fn cors_headers(allowed_origin: &str) -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": allowed_origin,
        "Access-Control-Allow-Methods": "GET, POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type, X-Api-Key",
        "Access-Control-Max-Age": "86400",
    })
}

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a response with the given status and JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value, allowed_origin: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(allowed_origin),
        "body": body.to_string(),
    })
}

/// Returns a 200 OK reporting how many parts were delivered.
#[must_use]
pub fn ok_delivered(parts: usize, request_id: &str, allowed_origin: &str) -> Value {
    json_response(
        200,
        &json!({ "ok": true, "parts": parts, "request_id": request_id }),
        allowed_origin,
    )
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(
    status_code: u16,
    message: &str,
    request_id: &str,
    allowed_origin: &str,
) -> Value {
    json_response(
        status_code,
        &json!({ "ok": false, "error": message, "request_id": request_id }),
        allowed_origin,
    )
}

/// Maps a [`NotifyError`] onto its status code and display message.
#[must_use]
pub fn error_to_response(error: &NotifyError, request_id: &str, allowed_origin: &str) -> Value {
    err_response(
        error.status_code(),
        &error.to_string(),
        request_id,
        allowed_origin,
    )
}

/// Returns a 204 for CORS preflight requests.
#[must_use]
pub fn preflight(allowed_origin: &str) -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(allowed_origin),
        "body": "",
    })
}
