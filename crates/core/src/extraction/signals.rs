//! Vocabulary checks shared by both extraction strategies

use paneboard_domain::constants::{ESTIMATE_TERMS, URGENCY_TERMS};
use paneboard_domain::{RequestType, Urgency};

/// True when the subject or body asks about price.
pub fn needs_estimate(subject: &str, body: &str) -> bool {
    let subject = subject.to_lowercase();
    let body = body.to_lowercase();
    ESTIMATE_TERMS.iter().any(|term| subject.contains(term) || body.contains(term))
}

pub fn urgency(body: &str) -> Urgency {
    let body = body.to_lowercase();
    if URGENCY_TERMS.iter().any(|term| body.contains(term)) {
        Urgency::High
    } else {
        Urgency::Normal
    }
}

pub fn request_type(needs_estimate: bool) -> RequestType {
    if needs_estimate {
        RequestType::QuoteRequest
    } else {
        RequestType::GeneralInquiry
    }
}
