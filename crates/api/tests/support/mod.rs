//! In-memory collaborators wired into a real router
#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use paneboard_api::{router, AppContext};
use paneboard_core::{
    CalendarProvider, CustomerNotifier, EstimateRepository, FieldExtractor, InboxService,
    JobRepository, JobRequestRepository, MailProvider, NotificationRepository, OverrideRepository,
    RecordRepositories, RecordsService, RuleBasedExtractor, ScheduledJobRepository,
    SchedulingService, SchedulingSettings, TeamRepository,
};
use paneboard_domain::{
    CalendarEventDraft, CalendarEventRef, ConfidenceModel, CustomerMessage, Estimate,
    EstimatePatch, Extraction, ExtractionRequest, ExtractionStrategy, Job, JobRequest, JobStatus,
    Notification, OverrideAction, PaneboardError, RawEmail, Result, ScheduledJob,
    ScheduledJobPatch, Team,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct StaticMailbox(pub Vec<RawEmail>);

#[async_trait]
impl MailProvider for StaticMailbox {
    async fn list_unread_ids(&self, max_results: u32) -> Result<Vec<String>> {
        Ok(self.0.iter().take(max_results as usize).map(|m| m.id.clone()).collect())
    }

    async fn get_message(&self, id: &str) -> Result<RawEmail> {
        self.0
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| PaneboardError::NotFound(format!("message {id}")))
    }
}

/// Stands in for a completion service that returned no function call.
pub struct UnavailableExtractor;

#[async_trait]
impl FieldExtractor for UnavailableExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Llm
    }

    async fn extract(&self, _request: &ExtractionRequest) -> Result<Extraction> {
        Err(PaneboardError::ExtractionUnavailable("no function call".into()))
    }
}

/// Keyed rows with generated `"{prefix}-N"` ids.
pub struct Table<T> {
    prefix: &'static str,
    next: AtomicU32,
    pub rows: Mutex<Vec<(String, T)>>,
}

impl<T: Clone> Table<T> {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: AtomicU32::new(1), rows: Mutex::new(Vec::new()) }
    }

    fn insert(&self, row: T) -> (String, T) {
        let id = format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst));
        self.rows.lock().unwrap().push((id.clone(), row.clone()));
        (id, row)
    }

    fn get(&self, id: &str) -> Result<T> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(row_id, _)| row_id == id)
            .map(|(_, row)| row.clone())
            .ok_or_else(|| PaneboardError::NotFound(format!("{} {id}", self.prefix)))
    }

    fn replace(&self, id: &str, update: impl FnOnce(&mut T)) -> Result<T> {
        let mut rows = self.rows.lock().unwrap();
        let (_, row) = rows
            .iter_mut()
            .find(|(row_id, _)| row_id == id)
            .ok_or_else(|| PaneboardError::NotFound(format!("{} {id}", self.prefix)))?;
        update(row);
        Ok(row.clone())
    }

    fn all_newest_first(&self) -> Vec<T> {
        self.rows.lock().unwrap().iter().rev().map(|(_, row)| row.clone()).collect()
    }
}

pub struct Store {
    pub job_requests: Table<JobRequest>,
    pub scheduled_jobs: Table<ScheduledJob>,
    pub estimates: Table<Estimate>,
    pub jobs: Table<Job>,
    pub notifications: Table<Notification>,
    pub overrides: Table<OverrideAction>,
    pub teams: Vec<Team>,
    pub sent: Mutex<Vec<CustomerMessage>>,
    pub events: Mutex<Vec<CalendarEventDraft>>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            job_requests: Table::new("jr"),
            scheduled_jobs: Table::new("sj"),
            estimates: Table::new("est"),
            jobs: Table::new("job"),
            notifications: Table::new("n"),
            overrides: Table::new("ov"),
            teams: vec![Team {
                id: "team-1".into(),
                name: "Alpha".into(),
                members: vec!["Sam".into(), "Riley".into()],
            }],
            sent: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JobRequestRepository for Store {
    async fn create(&self, request: JobRequest) -> Result<JobRequest> {
        let (id, row) = self.job_requests.insert(request);
        let stored = JobRequest { id: Some(id.clone()), ..row };
        self.job_requests.replace(&id, |r| *r = stored.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<JobRequest> {
        self.job_requests.get(id)
    }

    async fn update_status(&self, id: &str, status: JobStatus) -> Result<()> {
        self.job_requests.replace(id, |r| r.status = status).map(|_| ())
    }
}

#[async_trait]
impl ScheduledJobRepository for Store {
    async fn create(&self, job: ScheduledJob) -> Result<ScheduledJob> {
        let (id, row) = self.scheduled_jobs.insert(job);
        let stored = ScheduledJob { id: Some(id.clone()), ..row };
        self.scheduled_jobs.replace(&id, |r| *r = stored.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<ScheduledJob> {
        self.scheduled_jobs.get(id)
    }

    async fn apply_patch(&self, id: &str, patch: ScheduledJobPatch) -> Result<ScheduledJob> {
        self.scheduled_jobs.replace(id, |r| {
            r.status = patch.status;
            r.notes = patch.notes;
            r.updated_at = Some(patch.updated_at);
        })
    }
}

#[async_trait]
impl EstimateRepository for Store {
    async fn list(&self) -> Result<Vec<Estimate>> {
        Ok(self.estimates.all_newest_first())
    }

    async fn create(&self, estimate: Estimate) -> Result<Estimate> {
        let (id, row) = self.estimates.insert(estimate);
        let stored = Estimate { id: Some(id.clone()), ..row };
        self.estimates.replace(&id, |r| *r = stored.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Estimate> {
        self.estimates.get(id)
    }

    async fn update(&self, id: &str, patch: EstimatePatch) -> Result<Estimate> {
        self.estimates.replace(id, |r| {
            if let Some(status) = patch.status {
                r.status = status;
            }
            if let Some(amount) = patch.amount {
                r.amount = amount;
            }
        })
    }
}

#[async_trait]
impl JobRepository for Store {
    async fn list(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.all_newest_first())
    }

    async fn create(&self, job: Job) -> Result<Job> {
        let (id, row) = self.jobs.insert(job);
        Ok(Job { id: Some(id), ..row })
    }
}

#[async_trait]
impl TeamRepository for Store {
    async fn list(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

#[async_trait]
impl NotificationRepository for Store {
    async fn list(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.all_newest_first())
    }

    async fn create(&self, notification: Notification) -> Result<Notification> {
        let (id, row) = self.notifications.insert(notification);
        Ok(Notification { id: Some(id), ..row })
    }
}

#[async_trait]
impl OverrideRepository for Store {
    async fn list(&self) -> Result<Vec<OverrideAction>> {
        Ok(self.overrides.all_newest_first())
    }

    async fn create(&self, action: OverrideAction) -> Result<OverrideAction> {
        let (id, row) = self.overrides.insert(action);
        Ok(OverrideAction { id: Some(id), ..row })
    }
}

#[async_trait]
impl CalendarProvider for Store {
    async fn create_event(&self, draft: &CalendarEventDraft) -> Result<CalendarEventRef> {
        let mut events = self.events.lock().unwrap();
        events.push(draft.clone());
        Ok(CalendarEventRef {
            id: format!("evt-{}", events.len()),
            html_link: None,
            status: Some("confirmed".into()),
        })
    }
}

#[async_trait]
impl CustomerNotifier for Store {
    async fn send(&self, message: &CustomerMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn email(id: &str, day: u32, from: &str, subject: &str, body: &str) -> RawEmail {
    RawEmail {
        id: id.into(),
        thread_id: None,
        subject: subject.into(),
        sender: from.into(),
        received_at: Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).single(),
        body_text: body.into(),
        snippet: Some(body.chars().take(20).collect()),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<Store>,
}

impl TestApp {
    pub fn new(mail: Vec<RawEmail>) -> Self {
        Self::with_extractor(mail, Arc::new(RuleBasedExtractor::new(ConfidenceModel::default())))
    }

    pub fn with_extractor(mail: Vec<RawEmail>, extractor: Arc<dyn FieldExtractor>) -> Self {
        let store = Arc::new(Store::default());
        let inbox = InboxService::new(Arc::new(StaticMailbox(mail)), extractor, store.clone(), 10);
        let settings = SchedulingSettings::new("America/New_York", "Crystal Clear")
            .expect("valid timezone");
        let scheduling = SchedulingService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            settings,
        );
        let records = RecordsService::new(RecordRepositories {
            estimates: store.clone(),
            jobs: store.clone(),
            teams: store.clone(),
            notifications: store.clone(),
            overrides: store.clone(),
        });

        let ctx = AppContext::from_services(inbox, scheduling, records);
        Self { router: router(Arc::new(ctx)), store }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
