//! Inbox service - fetch unread mail and turn it into job requests

use std::cmp::Reverse;
use std::sync::Arc;

use paneboard_common::resilience::{with_retry, RetryConfig};
use paneboard_domain::constants::UNKNOWN_CUSTOMER;
use paneboard_domain::{
    parse_sender, Extraction, IngestEmailRequest, IngestOutcome, JobRequest, JobStatus,
    PaneboardError, ParsedEmail, RawEmail, Result,
};
use tracing::{debug, info, instrument};

use super::ports::MailProvider;
use crate::extraction::FieldExtractor;
use crate::scheduling::ports::JobRequestRepository;

pub struct InboxService {
    mail: Arc<dyn MailProvider>,
    extractor: Arc<dyn FieldExtractor>,
    job_requests: Arc<dyn JobRequestRepository>,
    retry: RetryConfig,
    default_max_results: u32,
}

impl InboxService {
    pub fn new(
        mail: Arc<dyn MailProvider>,
        extractor: Arc<dyn FieldExtractor>,
        job_requests: Arc<dyn JobRequestRepository>,
        default_max_results: u32,
    ) -> Self {
        Self { mail, extractor, job_requests, retry: RetryConfig::default(), default_max_results }
    }

    /// Override the retry policy for mail fetches.
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn extractor(&self) -> &Arc<dyn FieldExtractor> {
        &self.extractor
    }

    /// Unread messages, fetched one by one in provider order.
    #[instrument(skip(self))]
    pub async fn list_unread(&self, max_results: Option<u32>) -> Result<Vec<RawEmail>> {
        let max = max_results.unwrap_or(self.default_max_results);
        let ids = with_retry(&self.retry, PaneboardError::is_transient, || {
            self.mail.list_unread_ids(max)
        })
        .await?;

        let mut emails = Vec::with_capacity(ids.len());
        for id in &ids {
            emails.push(self.fetch(id).await?);
        }

        info!(count = emails.len(), "Fetched unread emails");
        Ok(emails)
    }

    /// Fetch and extract a single message.
    #[instrument(skip(self))]
    pub async fn parse_message(&self, id: &str) -> Result<ParsedEmail> {
        let email = self.fetch(id).await?;
        self.parse_email(&email).await
    }

    /// Parse the most recently received unread message, if any.
    pub async fn parse_latest(&self) -> Result<Option<ParsedEmail>> {
        let emails = self.list_unread(None).await?;
        let Some(latest) = newest(&emails) else {
            debug!("No unread emails to parse");
            return Ok(None);
        };
        self.parse_email(latest).await.map(Some)
    }

    /// Run the configured extractor over an already-fetched message.
    pub async fn parse_email(&self, email: &RawEmail) -> Result<ParsedEmail> {
        if !email.has_body() {
            return Err(PaneboardError::InvalidInput(
                "Unable to extract email content".to_string(),
            ));
        }

        let extraction = self.extractor.extract(&email.to_extraction_request()).await?;
        let sender = parse_sender(&email.sender);

        Ok(ParsedEmail {
            fields: extraction.rule_view(),
            urgency: extraction.urgency,
            request_type: extraction.request_type,
            confidence: extraction.confidence,
            subject: email.subject.clone(),
            sender: email.sender.clone(),
            sender_email: sender.address.or_else(|| extraction.fields.email.clone()),
            raw_content: email.body_text.clone(),
        })
    }

    /// Extract an email submitted by the dashboard and store it as a pending
    /// job request.
    #[instrument(skip(self, request), fields(email_id = %request.email_id))]
    pub async fn ingest(&self, request: IngestEmailRequest) -> Result<IngestOutcome> {
        if !request.is_complete() {
            return Err(PaneboardError::InvalidInput(
                "Missing required email information".to_string(),
            ));
        }

        let extraction = self.extractor.extract(&request.to_extraction_request()).await?;
        let row = pending_job_request(&request, &extraction);
        let job_request = self.job_requests.create(row).await?;

        info!(
            job_request_id = ?job_request.id,
            confidence = extraction.confidence,
            strategy = %extraction.strategy,
            "Job request created from email"
        );
        Ok(IngestOutcome { job_request, extraction })
    }

    async fn fetch(&self, id: &str) -> Result<RawEmail> {
        with_retry(&self.retry, PaneboardError::is_transient, || self.mail.get_message(id)).await
    }
}

/// Latest by `received_at`; undated messages sort last.
fn newest(emails: &[RawEmail]) -> Option<&RawEmail> {
    emails
        .iter()
        .enumerate()
        .max_by_key(|(idx, email)| (email.received_at, Reverse(*idx)))
        .map(|(_, email)| email)
}

fn pending_job_request(request: &IngestEmailRequest, extraction: &Extraction) -> JobRequest {
    let sender = parse_sender(&request.from);
    let fields = &extraction.fields;

    let customer_name = sender
        .display_name
        .or_else(|| fields.customer_name.clone())
        .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string());
    let customer_email = sender.address.unwrap_or_else(|| request.from.trim().to_string());

    JobRequest {
        id: None,
        email_id: request.email_id.clone(),
        customer_name,
        customer_email: Some(customer_email),
        service_type: fields.service.clone(),
        address: fields.address.clone(),
        requested_date: fields.requested_date.clone(),
        special_instructions: fields.notes.clone(),
        estimated_size: None,
        confidence_score: extraction.confidence,
        status: JobStatus::Pending,
        email_subject: request.subject.clone(),
        email_body: request.body.clone(),
        created_at: None,
    }
}
