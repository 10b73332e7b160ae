//! Regex rule strategy

use async_trait::async_trait;
use paneboard_domain::{
    ConfidenceModel, ExtractedFields, Extraction, ExtractionRequest, ExtractionStrategy, Result,
};
use tracing::debug;

use super::ports::FieldExtractor;
use super::rules::{find_field, Field};
use super::{finish_extraction, signals};

/// Extracts fields with the ordered rule table. Stateless; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExtractor {
    confidence_model: ConfidenceModel,
}

impl RuleBasedExtractor {
    pub fn new(confidence_model: ConfidenceModel) -> Self {
        Self { confidence_model }
    }

    /// Synchronous entry point used by the async trait method and benches.
    pub fn extract_now(&self, request: &ExtractionRequest) -> Extraction {
        let body = request.body_text.as_str();
        let fields = ExtractedFields {
            customer_name: find_field(Field::CustomerName, body),
            phone: find_field(Field::Phone, body),
            email: find_field(Field::Email, body),
            address: find_field(Field::Address, body),
            service: find_field(Field::Service, body),
            requested_date: find_field(Field::RequestedDate, body),
            alternative_dates: Vec::new(),
            notes: None,
            needs_estimate: signals::needs_estimate(request.subject(), body),
        };

        let extraction =
            finish_extraction(fields, request, self.confidence_model, ExtractionStrategy::Rules);
        debug!(
            confidence = extraction.confidence,
            needs_estimate = extraction.fields.needs_estimate,
            "Rule extraction complete"
        );
        extraction
    }
}

#[async_trait]
impl FieldExtractor for RuleBasedExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Rules
    }

    async fn extract(&self, request: &ExtractionRequest) -> Result<Extraction> {
        Ok(self.extract_now(request))
    }
}
