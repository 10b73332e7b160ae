//! Port interface for field extraction strategies

use async_trait::async_trait;
use paneboard_domain::{Extraction, ExtractionRequest, ExtractionStrategy, Result};

/// A strategy that turns an email body (and optional headers) into fields
///
/// The rule strategy never fails. The LLM strategy fails with
/// `ExtractionUnavailable` when the completion carries no usable payload.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    fn strategy(&self) -> ExtractionStrategy;

    async fn extract(&self, request: &ExtractionRequest) -> Result<Extraction>;
}
