//! Messages produced by the mail collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extraction::{EmailHeaders, Extraction, ExtractionRequest};
use super::scheduling::JobRequest;

/// An email as fetched from the provider. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmail {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    pub subject: String,
    /// Raw `From` header, e.g. `"Jane Doe" <jane@example.com>`.
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(rename = "date", default)]
    pub received_at: Option<DateTime<Utc>>,
    #[serde(rename = "body")]
    pub body_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl RawEmail {
    pub fn headers(&self) -> EmailHeaders {
        EmailHeaders { subject: self.subject.clone(), from: self.sender.clone() }
    }

    /// Build the extractor input for this message.
    pub fn to_extraction_request(&self) -> ExtractionRequest {
        ExtractionRequest { body_text: self.body_text.clone(), headers: Some(self.headers()) }
    }

    pub fn has_body(&self) -> bool {
        !self.body_text.trim().is_empty()
    }
}

/// Dashboard request to turn an already-fetched email into a job request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestEmailRequest {
    #[serde(default)]
    pub email_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub body: String,
}

impl IngestEmailRequest {
    /// All four fields must be non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.email_id, &self.subject, &self.from, &self.body]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn to_extraction_request(&self) -> ExtractionRequest {
        ExtractionRequest {
            body_text: self.body.clone(),
            headers: Some(EmailHeaders { subject: self.subject.clone(), from: self.from.clone() }),
        }
    }
}

/// A stored job request together with the extraction that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOutcome {
    pub job_request: JobRequest,
    pub extraction: Extraction,
}

/// Parse an RFC 2822 `Date` header into UTC, tolerating the trailing
/// `(UTC)`-style comments some providers append.
pub fn parse_date_header(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    let without_comment = match trimmed.find(" (") {
        Some(idx) if trimmed.ends_with(')') => &trimmed[..idx],
        _ => trimmed,
    };

    DateTime::parse_from_rfc2822(without_comment)
        .or_else(|_| DateTime::parse_from_rfc3339(without_comment))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
