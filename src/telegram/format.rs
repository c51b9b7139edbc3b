//! Escaping for Telegram `parse_mode` text.

/// Characters MarkdownV2 requires to be backslash-escaped.
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` for the given `parse_mode`; plain text passes through.
#[must_use]
pub fn escape_for_parse_mode(text: &str, parse_mode: Option<&str>) -> String {
    match parse_mode {
        Some(mode) if mode.eq_ignore_ascii_case("MarkdownV2") => escape_markdown_v2(text),
        Some(mode) if mode.eq_ignore_ascii_case("HTML") => escape_html(text),
        _ => text.to_string(),
    }
}
