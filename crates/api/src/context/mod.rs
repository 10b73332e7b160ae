//! Application context - dependency injection container

use std::sync::Arc;

use paneboard_core::{
    FieldExtractor, InboxService, JobRequestRepository, RecordsService, RuleBasedExtractor,
    SchedulingService, SchedulingSettings,
};
use paneboard_domain::{
    Config, ExtractionConfig, ExtractionStrategy, OpenAiConfig, PaneboardError, Result,
};
use paneboard_infra::datastore::{PostgrestJobRequestRepository, PostgrestScheduledJobRepository};
use paneboard_infra::{
    record_repositories, GmailClient, GoogleCalendarClient, GoogleTokenSource, HttpClient,
    OpenAIExtractor, PostgrestClient,
};
use tracing::info;

/// Application context - holds the services every route talks to
pub struct AppContext {
    pub inbox: Arc<InboxService>,
    pub scheduling: Arc<SchedulingService>,
    pub records: Arc<RecordsService>,
}

impl AppContext {
    /// Build every collaborator from explicit configuration.
    ///
    /// # Errors
    /// `Config` when the LLM strategy is selected without OpenAI settings or
    /// the calendar timezone is unknown; transport setup failures otherwise.
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::new()?;
        // The inbox service retries mail reads itself.
        let mail_http = HttpClient::builder().no_retry().build()?;

        let extractor = build_extractor(config.extraction, config.openai.as_ref(), &http)?;
        let tokens = Arc::new(GoogleTokenSource::new(http.clone(), &config.google));
        let gmail = Arc::new(GmailClient::new(mail_http, Arc::clone(&tokens), &config.gmail));
        let calendar =
            Arc::new(GoogleCalendarClient::new(http.clone(), Arc::clone(&tokens), &config.calendar));

        let datastore = PostgrestClient::new(http, &config.datastore);
        let job_requests: Arc<dyn JobRequestRepository> =
            Arc::new(PostgrestJobRequestRepository::new(datastore.clone()));
        let scheduled_jobs = Arc::new(PostgrestScheduledJobRepository::new(datastore.clone()));

        let inbox = InboxService::new(
            gmail.clone(),
            extractor,
            Arc::clone(&job_requests),
            config.gmail.max_results,
        );
        let settings = SchedulingSettings::new(
            &config.calendar.timezone,
            config.notifications.business_name.clone(),
        )?;
        let scheduling =
            SchedulingService::new(job_requests, scheduled_jobs, calendar, gmail, settings);
        let records = RecordsService::new(record_repositories(&datastore));

        info!(
            strategy = %config.extraction.strategy,
            confidence_model = %config.extraction.confidence_model,
            timezone = %config.calendar.timezone,
            "Application context initialised"
        );

        Ok(Self::from_services(inbox, scheduling, records))
    }

    /// Assemble a context from already-built services.
    pub fn from_services(
        inbox: InboxService,
        scheduling: SchedulingService,
        records: RecordsService,
    ) -> Self {
        Self {
            inbox: Arc::new(inbox),
            scheduling: Arc::new(scheduling),
            records: Arc::new(records),
        }
    }
}

/// Pick the extraction strategy named in configuration.
///
/// # Errors
/// `Config` when `llm` is selected but no OpenAI settings are present.
pub fn build_extractor(
    extraction: ExtractionConfig,
    openai: Option<&OpenAiConfig>,
    http: &HttpClient,
) -> Result<Arc<dyn FieldExtractor>> {
    match extraction.strategy {
        ExtractionStrategy::Rules => {
            Ok(Arc::new(RuleBasedExtractor::new(extraction.confidence_model)))
        }
        ExtractionStrategy::Llm => {
            let openai = openai.ok_or_else(|| {
                PaneboardError::Config(
                    "LLM extraction requires OpenAI settings (PANEBOARD_OPENAI_API_KEY)"
                        .to_string(),
                )
            })?;
            Ok(Arc::new(
                OpenAIExtractor::new(http.clone(), openai)
                    .with_confidence_model(extraction.confidence_model),
            ))
        }
    }
}
