//! Field extraction inputs, results, and the JSON views the dashboard reads

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;
use crate::utils::text::clean_value;

/// Which extractor produced (or should produce) a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Ordered regex rule table; never fails.
    #[default]
    Rules,
    /// Schema-constrained LLM completion.
    Llm,
}

impl_domain_status_conversions!(ExtractionStrategy {
    Rules => "rules",
    Llm => "llm",
});

/// How a confidence score is derived from the populated fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceModel {
    /// name 0.3 + address 0.4 + phone 0.3, capped at 1.0
    #[default]
    WeightedRequired,
    /// share of the six required fields that are non-blank, two decimals
    RequiredFraction,
}

impl_domain_status_conversions!(ConfidenceModel {
    WeightedRequired => "weighted_required",
    RequiredFraction => "required_fraction",
});

/// Optional header metadata accompanying a body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailHeaders {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub from: String,
}

/// Extractor input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub headers: Option<EmailHeaders>,
}

impl ExtractionRequest {
    pub fn new(body_text: impl Into<String>) -> Self {
        Self { body_text: body_text.into(), headers: None }
    }

    pub fn with_headers(mut self, subject: impl Into<String>, from: impl Into<String>) -> Self {
        self.headers = Some(EmailHeaders { subject: subject.into(), from: from.into() });
        self
    }

    pub fn subject(&self) -> &str {
        self.headers.as_ref().map_or("", |h| h.subject.as_str())
    }

    pub fn from(&self) -> Option<&str> {
        self.headers.as_ref().map(|h| h.from.as_str()).filter(|from| !from.trim().is_empty())
    }
}

/// Best-effort structured customer/job fields. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub requested_date: Option<String>,
    #[serde(default)]
    pub alternative_dates: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub needs_estimate: bool,
}

impl ExtractedFields {
    /// Trim every value and turn blank strings into `None`.
    pub fn normalized(self) -> Self {
        Self {
            customer_name: self.customer_name.and_then(|v| clean_value(&v)),
            phone: self.phone.and_then(|v| clean_value(&v)),
            email: self.email.and_then(|v| clean_value(&v)),
            address: self.address.and_then(|v| clean_value(&v)),
            service: self.service.and_then(|v| clean_value(&v)),
            requested_date: self.requested_date.and_then(|v| clean_value(&v)),
            alternative_dates: self
                .alternative_dates
                .into_iter()
                .filter_map(|v| clean_value(&v))
                .collect(),
            notes: self.notes.and_then(|v| clean_value(&v)),
            needs_estimate: self.needs_estimate,
        }
    }

    /// The six fields a complete job request needs, in a fixed order.
    pub fn required_fields(&self) -> [Option<&str>; 6] {
        [
            self.customer_name.as_deref(),
            self.phone.as_deref(),
            self.email.as_deref(),
            self.address.as_deref(),
            self.service.as_deref(),
            self.requested_date.as_deref(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.required_fields().iter().all(Option::is_none)
            && self.alternative_dates.is_empty()
            && self.notes.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    #[default]
    Normal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    #[serde(rename = "Quote Request")]
    QuoteRequest,
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

/// Result of one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub fields: ExtractedFields,
    pub urgency: Urgency,
    pub request_type: RequestType,
    /// Normalised completeness estimate in `[0, 1]`.
    pub confidence: f32,
    pub strategy: ExtractionStrategy,
}

impl Extraction {
    pub fn rule_view(&self) -> RuleExtractionView {
        RuleExtractionView {
            name: self.fields.customer_name.clone(),
            phone: self.fields.phone.clone(),
            email: self.fields.email.clone(),
            address: self.fields.address.clone(),
            service: self.fields.service.clone(),
            requested_date: self.fields.requested_date.clone(),
            needs_estimate: self.fields.needs_estimate,
        }
    }

    pub fn llm_view(&self) -> LlmExtractionView {
        LlmExtractionView {
            customer_name: self.fields.customer_name.clone(),
            phone: self.fields.phone.clone(),
            email: self.fields.email.clone(),
            address: self.fields.address.clone(),
            service: self.fields.service.clone(),
            preferred_date: self.fields.requested_date.clone(),
            alternative_dates: self.fields.alternative_dates.clone(),
            notes: self.fields.notes.clone(),
            confidence: self.confidence,
        }
    }
}

/// Regex-path output shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleExtractionView {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub service: Option<String>,
    pub requested_date: Option<String>,
    pub needs_estimate: bool,
}

/// LLM-path output shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmExtractionView {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub service: Option<String>,
    pub preferred_date: Option<String>,
    pub alternative_dates: Vec<String>,
    pub notes: Option<String>,
    pub confidence: f32,
}

/// A fetched message run through an extractor, with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEmail {
    #[serde(flatten)]
    pub fields: RuleExtractionView,
    pub urgency: Urgency,
    pub request_type: RequestType,
    pub confidence: f32,
    pub subject: String,
    pub sender: String,
    pub sender_email: Option<String>,
    pub raw_content: String,
}
