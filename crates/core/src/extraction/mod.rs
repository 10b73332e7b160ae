//! Email field extraction
//!
//! One ordered rule table ([`rules::RULE_TABLE`]) consumed by one extraction
//! function ([`RuleBasedExtractor::extract_now`]), plus the pieces both
//! strategies share: vocabulary signals, sender fallback, and confidence.
//!
//! ```
//! use paneboard_core::extraction::{extract, RuleBasedExtractor};
//! use paneboard_domain::{ExtractionRequest, Urgency};
//!
//! let request = ExtractionRequest::new("name: Alice Smith\nNeed it asap")
//!     .with_headers("Windows", "");
//! let extraction = extract(&request, Default::default());
//!
//! assert_eq!(extraction.fields.customer_name.as_deref(), Some("Alice Smith"));
//! assert_eq!(extraction.urgency, Urgency::High);
//! ```

pub mod confidence;
pub mod ports;
pub mod rule_extractor;
pub mod rules;
pub mod signals;

use paneboard_domain::{
    parse_sender, ConfidenceModel, ExtractedFields, Extraction, ExtractionRequest,
    ExtractionStrategy,
};

pub use ports::FieldExtractor;
pub use rule_extractor::RuleBasedExtractor;

/// Run the rule strategy once.
pub fn extract(request: &ExtractionRequest, model: ConfidenceModel) -> Extraction {
    RuleBasedExtractor::new(model).extract_now(request)
}

/// Complete raw fields from either strategy into an [`Extraction`].
///
/// Normalises values, fills a missing name and email from the `From` header,
/// ORs the vocabulary estimate check into `needs_estimate`, derives urgency
/// and request type, and scores confidence.
pub fn finish_extraction(
    fields: ExtractedFields,
    request: &ExtractionRequest,
    model: ConfidenceModel,
    strategy: ExtractionStrategy,
) -> Extraction {
    let mut fields = fields.normalized();

    if let Some(from) = request.from() {
        let sender = parse_sender(from);
        if fields.customer_name.is_none() {
            fields.customer_name = sender.display_name;
        }
        if fields.email.is_none() {
            fields.email = sender.address;
        }
    }

    fields.needs_estimate =
        fields.needs_estimate || signals::needs_estimate(request.subject(), &request.body_text);

    let urgency = signals::urgency(&request.body_text);
    let request_type = signals::request_type(fields.needs_estimate);
    let confidence = confidence::score(model, &fields);

    Extraction { fields, urgency, request_type, confidence, strategy }
}
