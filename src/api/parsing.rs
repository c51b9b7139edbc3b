use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::{NotificationRequest, PingDetails};
use crate::errors::NotifyError;

/// Largest custom notification accepted, in characters.
pub const MAX_INBOUND_MESSAGE_LENGTH: usize = 50_000;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Header lookup on the full event payload.
pub fn request_header<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, name))
}

/// HTTP method from either an HTTP API (v2) or REST API (v1) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

#[must_use]
pub fn ping_details(payload: &Value) -> PingDetails {
    PingDetails {
        method: request_method(payload).unwrap_or("GET").to_uppercase(),
        path: request_path(payload).unwrap_or("/").to_string(),
        source_ip: v_str(payload, &["requestContext", "http", "sourceIp"])
            .or_else(|| v_str(payload, &["requestContext", "identity", "sourceIp"]))
            .map(ToString::to_string),
        user_agent: v_str(payload, &["requestContext", "http", "userAgent"])
            .or_else(|| request_header(payload, "User-Agent"))
            .map(ToString::to_string),
    }
}

/// Request body, decoded when the integration delivered it as base64.
///
/// Returns `Ok(None)` when there is no body or it is only whitespace, which
/// marks the request as a monitoring ping.
pub fn extract_body(payload: &Value) -> Result<Option<String>, NotifyError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => return Err(NotifyError::ParseError("Invalid body format".to_string())),
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let decoded = if is_base64 {
        let bytes = STANDARD
            .decode(body.trim())
            .map_err(|e| NotifyError::ParseError(format!("Invalid base64 body: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| NotifyError::ParseError(format!("Body is not valid UTF-8: {}", e)))?
    } else {
        body.clone()
    };

    if decoded.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(decoded))
    }
}

/// Parse and bound a custom notification body.
pub fn parse_notification(body: &str) -> Result<NotificationRequest, NotifyError> {
    let request: NotificationRequest = serde_json::from_str(body)?;

    let length = request.message.chars().count();
    if length > MAX_INBOUND_MESSAGE_LENGTH {
        return Err(NotifyError::PayloadTooLarge {
            length,
            limit: MAX_INBOUND_MESSAGE_LENGTH,
        });
    }

    Ok(request)
}
