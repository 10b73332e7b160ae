//! Text cleanup for captured values and HTML bodies

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_REGEX should compile - this is a bug"));

static BLOCK_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(?:br\s*/?|/p|/div|/li|/tr|/h[1-6])\s*>")
        .expect("BLOCK_BREAK_REGEX should compile - this is a bug")
});

static INVISIBLE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<\s*(style|script|head)\b.*?<\s*/\s*(?:style|script|head)\s*>")
        .expect("INVISIBLE_BLOCK_REGEX should compile - this is a bug")
});

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("TAG_REGEX should compile - this is a bug"));

static BLANK_LINES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t]*(?:\n[ \t]*)+").expect("BLANK_LINES_REGEX should compile - this is a bug")
});

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_REGEX.replace_all(value.trim(), " ").into_owned()
}

/// Normalise a captured field value.
///
/// Collapses whitespace and strips trailing `,`, `.` and `;`. Returns `None`
/// when nothing is left.
pub fn clean_value(value: &str) -> Option<String> {
    let collapsed = collapse_whitespace(value);
    let trimmed = collapsed.trim_end_matches([',', '.', ';']).trim_end();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reduce an HTML body to readable text, keeping line breaks at block ends.
pub fn html_to_text(html: &str) -> String {
    let without_hidden = INVISIBLE_BLOCK_REGEX.replace_all(html, "");
    let with_breaks = BLOCK_BREAK_REGEX.replace_all(&without_hidden, "\n");
    let stripped = TAG_REGEX.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);

    let lines: Vec<String> = decoded
        .lines()
        .map(|line| WHITESPACE_REGEX.replace_all(line.trim(), " ").into_owned())
        .collect();

    BLANK_LINES_REGEX.replace_all(lines.join("\n").trim(), "\n").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
