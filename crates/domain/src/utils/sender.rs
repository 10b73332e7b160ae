//! `From` header parsing

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ANGLE_ADDR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(.*?)\s*<\s*([^<>\s]+@[^<>\s]+)\s*>\s*$")
        .expect("ANGLE_ADDR_REGEX should compile - this is a bug")
});

static BARE_ADDR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})\s*$")
        .expect("BARE_ADDR_REGEX should compile - this is a bug")
});

/// Display name and address pulled out of a `From` header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderAddress {
    pub display_name: Option<String>,
    pub address: Option<String>,
}

/// Split a `From` header into display name and address.
///
/// Accepts `"Display Name" <addr@host>`, `Display Name <addr@host>`,
/// `<addr@host>` and a bare `addr@host`. A display name is only taken from
/// the angle-address form, so placeholders such as `Unknown Sender` yield an
/// empty result.
///
/// ```
/// use paneboard_domain::parse_sender;
///
/// let sender = parse_sender("\"Jane Doe\" <jane@example.com>");
/// assert_eq!(sender.display_name.as_deref(), Some("Jane Doe"));
/// assert_eq!(sender.address.as_deref(), Some("jane@example.com"));
/// ```
pub fn parse_sender(header: &str) -> SenderAddress {
    if let Some(caps) = ANGLE_ADDR_REGEX.captures(header) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let name = name.trim().trim_matches('"').trim();
        return SenderAddress {
            display_name: (!name.is_empty()).then(|| name.to_string()),
            address: caps.get(2).map(|m| m.as_str().to_string()),
        };
    }

    if let Some(caps) = BARE_ADDR_REGEX.captures(header) {
        return SenderAddress {
            display_name: None,
            address: caps.get(1).map(|m| m.as_str().to_string()),
        };
    }

    SenderAddress::default()
}
