//! Text of the messages relayed to Telegram.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::models::PingDetails;
use crate::telegram::format::escape_for_parse_mode;

/// Message sent for a monitoring ping. Each line is escaped whole for
/// `parse_mode`, labels included, since values come from the caller.
#[must_use]
pub fn format_ping_message(
    details: &PingDetails,
    at: DateTime<Utc>,
    parse_mode: Option<&str>,
) -> String {
    let time = at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let fields = [
        ("Time", time.as_str()),
        ("Method", details.method.as_str()),
        ("Path", details.path.as_str()),
        ("Source IP", details.source_ip.as_deref().unwrap_or("unknown")),
        ("User-Agent", details.user_agent.as_deref().unwrap_or("unknown")),
    ];

    let mut lines = vec![escape_for_parse_mode("🔔 Ping received", parse_mode)];
    lines.extend(
        fields
            .iter()
            .map(|(label, value)| escape_for_parse_mode(&format!("{label}: {value}"), parse_mode)),
    );

    lines.join("\n")
}
