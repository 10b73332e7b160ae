//! Message body decoding and outbound message encoding

use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use paneboard_domain::utils::text::html_to_text;

use super::types::MessagePart;

/// Decode a base64url body, padded or not. Invalid UTF-8 is replaced.
pub fn decode_body(data: &str) -> Option<String> {
    let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(compact.trim_end_matches('='))
        .or_else(|_| URL_SAFE.decode(&compact))
        .or_else(|_| STANDARD.decode(&compact))
        .ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Case-insensitive header lookup on the top-level part.
pub fn header<'a>(part: &'a MessagePart, name: &str) -> Option<&'a str> {
    part.headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
        .filter(|v| !v.trim().is_empty())
}

/// Readable text of a message.
///
/// The first `text/plain` part anywhere in the tree wins; otherwise the first
/// `text/html` part is reduced to text; otherwise the root body is decoded.
pub fn extract_text(payload: &MessagePart) -> String {
    if let Some(text) = find_part(payload, "text/plain").and_then(part_data) {
        return text;
    }
    if let Some(html) = find_part(payload, "text/html").and_then(part_data) {
        return html_to_text(&html);
    }

    let root = part_data(payload).unwrap_or_default();
    if mime_is(payload, "text/html") {
        html_to_text(&root)
    } else {
        root
    }
}

fn find_part<'a>(part: &'a MessagePart, mime: &str) -> Option<&'a MessagePart> {
    if mime_is(part, mime) && part_data(part).is_some() {
        return Some(part);
    }
    part.parts.iter().find_map(|child| find_part(child, mime))
}

fn mime_is(part: &MessagePart, mime: &str) -> bool {
    part.mime_type.as_deref().is_some_and(|m| m.eq_ignore_ascii_case(mime))
}

fn part_data(part: &MessagePart) -> Option<String> {
    part.body.as_ref()?.data.as_deref().filter(|d| !d.is_empty()).and_then(decode_body)
}

/// RFC 2047 encoded-word for non-ASCII header values.
fn encode_header(value: &str) -> String {
    if value.is_ascii() {
        value.to_string()
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(value))
    }
}

/// Build an HTML message and encode it for `users.messages.send`.
pub fn encode_html_message(from: Option<&str>, to: &str, subject: &str, html: &str) -> String {
    let mut message = String::new();
    if let Some(from) = from {
        message.push_str(&format!("From: {from}\r\n"));
    }
    message.push_str(&format!("To: {to}\r\n"));
    message.push_str(&format!("Subject: {}\r\n", encode_header(subject)));
    message.push_str("MIME-Version: 1.0\r\n");
    message.push_str("Content-Type: text/html; charset=UTF-8\r\n");
    message.push_str("\r\n");
    message.push_str(html);

    URL_SAFE.encode(message.as_bytes())
}
