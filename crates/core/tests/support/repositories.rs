//! In-memory repository implementations for testing

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use paneboard_core::{
    EstimateRepository, JobRepository, JobRequestRepository, NotificationRepository,
    OverrideRepository, ScheduledJobRepository, TeamRepository,
};
use paneboard_domain::{
    Estimate, EstimatePatch, Job, JobRequest, JobStatus, Notification, OverrideAction,
    PaneboardError, Result as DomainResult, ScheduledJob, ScheduledJobPatch, Team,
};

fn next_id(counter: &AtomicU32, prefix: &str) -> String {
    format!("{prefix}-{}", counter.fetch_add(1, Ordering::SeqCst) + 1)
}

#[derive(Default)]
pub struct InMemoryJobRequests {
    pub rows: Mutex<Vec<JobRequest>>,
    ids: AtomicU32,
}

impl InMemoryJobRequests {
    pub fn with(rows: Vec<JobRequest>) -> Self {
        Self { rows: Mutex::new(rows), ids: AtomicU32::new(100) }
    }

    pub fn snapshot(&self) -> Vec<JobRequest> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRequestRepository for InMemoryJobRequests {
    async fn create(&self, mut request: JobRequest) -> DomainResult<JobRequest> {
        request.id = Some(next_id(&self.ids, "jr"));
        request.created_at = Some(Utc::now());
        self.rows.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<JobRequest> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| PaneboardError::NotFound(format!("job request {id}")))
    }

    async fn update_status(&self, id: &str, status: JobStatus) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| PaneboardError::NotFound(format!("job request {id}")))?;
        row.status = status;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryScheduledJobs {
    pub rows: Mutex<Vec<ScheduledJob>>,
    ids: AtomicU32,
}

impl InMemoryScheduledJobs {
    pub fn with(rows: Vec<ScheduledJob>) -> Self {
        Self { rows: Mutex::new(rows), ids: AtomicU32::new(100) }
    }

    pub fn snapshot(&self) -> Vec<ScheduledJob> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduledJobRepository for InMemoryScheduledJobs {
    async fn create(&self, mut job: ScheduledJob) -> DomainResult<ScheduledJob> {
        job.id = Some(next_id(&self.ids, "sj"));
        self.rows.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<ScheduledJob> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| PaneboardError::NotFound(format!("scheduled job {id}")))
    }

    async fn apply_patch(&self, id: &str, patch: ScheduledJobPatch) -> DomainResult<ScheduledJob> {
        let mut rows = self.rows.lock().unwrap();
        let job = rows
            .iter_mut()
            .find(|j| j.id.as_deref() == Some(id))
            .ok_or_else(|| PaneboardError::NotFound(format!("scheduled job {id}")))?;
        job.status = patch.status;
        job.notes = patch.notes;
        job.updated_at = Some(patch.updated_at);
        Ok(job.clone())
    }
}

#[derive(Default)]
pub struct InMemoryEstimates {
    pub rows: Mutex<Vec<Estimate>>,
    ids: AtomicU32,
}

#[async_trait]
impl EstimateRepository for InMemoryEstimates {
    async fn list(&self) -> DomainResult<Vec<Estimate>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }

    async fn create(&self, mut estimate: Estimate) -> DomainResult<Estimate> {
        estimate.id = Some(next_id(&self.ids, "est"));
        estimate.created_at = Some(Utc::now());
        self.rows.lock().unwrap().push(estimate.clone());
        Ok(estimate)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Estimate> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| PaneboardError::NotFound(format!("row {id}")))
    }

    async fn update(&self, id: &str, patch: EstimatePatch) -> DomainResult<Estimate> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| PaneboardError::NotFound(format!("row {id}")))?;
        if let Some(amount) = patch.amount {
            row.amount = amount;
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(address) = patch.address {
            row.address = address;
        }
        if let Some(details) = patch.details {
            row.details = details;
        }
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryJobs {
    pub rows: Mutex<Vec<Job>>,
    ids: AtomicU32,
}

#[async_trait]
impl JobRepository for InMemoryJobs {
    async fn list(&self) -> DomainResult<Vec<Job>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, mut job: Job) -> DomainResult<Job> {
        job.id = Some(next_id(&self.ids, "job"));
        self.rows.lock().unwrap().push(job.clone());
        Ok(job)
    }
}

pub struct StaticTeams(pub Vec<Team>);

#[async_trait]
impl TeamRepository for StaticTeams {
    async fn list(&self) -> DomainResult<Vec<Team>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct InMemoryNotifications {
    pub rows: Mutex<Vec<Notification>>,
    ids: AtomicU32,
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn list(&self) -> DomainResult<Vec<Notification>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, mut notification: Notification) -> DomainResult<Notification> {
        notification.id = Some(next_id(&self.ids, "n"));
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }
}

#[derive(Default)]
pub struct InMemoryOverrides {
    pub rows: Mutex<Vec<OverrideAction>>,
    ids: AtomicU32,
}

#[async_trait]
impl OverrideRepository for InMemoryOverrides {
    async fn list(&self) -> DomainResult<Vec<OverrideAction>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, mut action: OverrideAction) -> DomainResult<OverrideAction> {
        action.id = Some(next_id(&self.ids, "ov"));
        self.rows.lock().unwrap().push(action.clone());
        Ok(action)
    }
}
