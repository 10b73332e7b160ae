//! The ordered field rule table
//!
//! Every field has labeled rules (`Label: value` lines) followed by shape
//! rules that recognise the value on its own. For each field the first rule
//! whose capture survives post-processing wins; shape rules are therefore only
//! consulted when no labeled rule produced a value.

use once_cell::sync::Lazy;
use regex::Regex;

use paneboard_domain::utils::text::clean_value;

/// Field a rule fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    Phone,
    Email,
    Address,
    Service,
    RequestedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Labeled,
    Shape,
}

/// Cleanup applied to a raw capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Collapse whitespace, strip trailing `,.;`
    Text,
    /// Text, and reject values with fewer than seven digits
    Phone,
    /// Text, lowercased
    Lowercase,
    /// Text, and reject values that are really email addresses
    Address,
}

impl PostProcess {
    pub fn apply(self, raw: &str) -> Option<String> {
        let value = clean_value(raw)?;
        match self {
            Self::Text => Some(value),
            Self::Phone => {
                let digits = value.chars().filter(char::is_ascii_digit).count();
                (digits >= MIN_PHONE_DIGITS).then_some(value)
            }
            Self::Lowercase => Some(value.to_lowercase()),
            Self::Address => (!value.contains('@')).then_some(value),
        }
    }
}

const MIN_PHONE_DIGITS: usize = 7;

/// One row of the rule table. The value is always capture group 1.
#[derive(Debug)]
pub struct FieldRule {
    pub field: Field,
    pub kind: RuleKind,
    pub name: &'static str,
    pub pattern: Regex,
    pub post: PostProcess,
}

impl FieldRule {
    /// First capture in `text` that survives post-processing.
    pub fn find(&self, text: &str) -> Option<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|value| self.post.apply(value.as_str()))
    }
}

const STREET_SUFFIXES: &str = "Road|Rd|Street|St|Avenue|Ave|Lane|Ln|Drive|Dr|Boulevard|Blvd|\
                               Highway|Hwy|Court|Ct|Circle|Cir|Place|Pl|Terrace|Ter|Way";

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|\
                      November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

const SERVICE_SUBJECTS: &str =
    "window|gutter|pressure|power|screen|solar[- ]panel|skylight|glass|siding|roof|deck";

// (field, kind, name, pattern, post) in evaluation order
fn rule_specs() -> Vec<(Field, RuleKind, &'static str, String, PostProcess)> {
    use Field::{Address, CustomerName, Email, Phone, RequestedDate, Service};
    use PostProcess::{Lowercase, Text};
    use RuleKind::{Labeled, Shape};

    vec![
        (
            CustomerName,
            Labeled,
            "name_label",
            r"(?im)\b(?:name|customer|client)[ \t]*:[ \t]*([A-Za-z][A-Za-z .'-]*)".to_string(),
            Text,
        ),
        (
            CustomerName,
            Shape,
            "name_intro",
            r"(?i:\bmy name is)[ \t]+([A-Z][A-Za-z'-]+(?:[ \t]+[A-Z][A-Za-z'-]+){0,2})"
                .to_string(),
            Text,
        ),
        (
            Phone,
            Labeled,
            "phone_label",
            r"(?im)\b(?:phone|telephone|tel|cell|mobile)[ \t]*:[ \t]*([\d+()\-. ]+)".to_string(),
            PostProcess::Phone,
        ),
        (
            Phone,
            Shape,
            "phone_digits",
            r"((?:\+?1[-. ]?)?\(?\b\d{3}\)?[-. ]?\d{3}[-. ]?\d{4})\b".to_string(),
            PostProcess::Phone,
        ),
        (
            Email,
            Labeled,
            "email_label",
            r"(?im)\b(?:e-?mail(?:[ \t]+address)?)[ \t]*:[ \t]*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})"
                .to_string(),
            Text,
        ),
        (
            Email,
            Shape,
            "email_bare",
            r"\b([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b".to_string(),
            Text,
        ),
        (
            Address,
            Labeled,
            "address_label",
            r"(?im)\b(?:address|location)[ \t]*:[ \t]*([^;\r\n]+)".to_string(),
            PostProcess::Address,
        ),
        (
            Address,
            Shape,
            "street_address",
            format!(r"(?i)\b(\d+[ \t]+[A-Za-z0-9 \t,.]+?\b(?:{STREET_SUFFIXES}))\b"),
            PostProcess::Address,
        ),
        (
            Service,
            Labeled,
            "service_label",
            r"(?im)\b(?:service|work|job)[ \t]*:[ \t]*([^\r\n]+)".to_string(),
            Text,
        ),
        (
            Service,
            Shape,
            "service_vocabulary",
            format!(r"(?i)\b((?:{SERVICE_SUBJECTS})[ \t]+(?:cleaning|washing|wash|repair))\b"),
            Lowercase,
        ),
        (
            RequestedDate,
            Labeled,
            "date_label",
            r"(?im)\b(?:preferred date|date|scheduled|appointment)[ \t]*:[ \t]*([^\r\n]+)"
                .to_string(),
            Text,
        ),
        (
            RequestedDate,
            Shape,
            "date_phrase",
            format!(
                r"(?i)\b(?:on|for|by)[ \t]+((?:{MONTHS})\.?[ \t]+\d{{1,2}}(?:st|nd|rd|th)?(?:,?[ \t]+\d{{4}})?)\b"
            ),
            Text,
        ),
        (RequestedDate, Shape, "date_iso", r"\b(\d{4}-\d{2}-\d{2})\b".to_string(), Text),
        (
            RequestedDate,
            Shape,
            "date_numeric",
            r"\b(\d{1,2}/\d{1,2}(?:/\d{2,4})?)\b".to_string(),
            Text,
        ),
    ]
}

/// The compiled rule table, in evaluation order
pub static RULE_TABLE: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    rule_specs()
        .into_iter()
        .map(|(field, kind, name, pattern, post)| FieldRule {
            field,
            kind,
            name,
            pattern: Regex::new(&pattern).expect("RULE_TABLE patterns should compile - this is a bug"),
            post,
        })
        .collect()
});

/// Run the table for one field.
pub fn find_field(field: Field, text: &str) -> Option<String> {
    RULE_TABLE.iter().filter(|rule| rule.field == field).find_map(|rule| rule.find(text))
}
