//! Port interfaces for job scheduling collaborators

use async_trait::async_trait;
use paneboard_domain::{
    CalendarEventDraft, CalendarEventRef, CustomerMessage, JobRequest, JobStatus, Result,
    ScheduledJob, ScheduledJobPatch,
};

/// Persistence for `job_requests` rows
#[async_trait]
pub trait JobRequestRepository: Send + Sync {
    /// Insert a new request and return the stored row (with id).
    async fn create(&self, request: JobRequest) -> Result<JobRequest>;

    /// Fails with `NotFound` when no row has this id.
    async fn find_by_id(&self, id: &str) -> Result<JobRequest>;

    async fn update_status(&self, id: &str, status: JobStatus) -> Result<()>;
}

/// Persistence for `scheduled_jobs` rows
#[async_trait]
pub trait ScheduledJobRepository: Send + Sync {
    async fn create(&self, job: ScheduledJob) -> Result<ScheduledJob>;

    /// Fails with `NotFound` when no row has this id.
    async fn find_by_id(&self, id: &str) -> Result<ScheduledJob>;

    /// Apply `patch` and return the updated row.
    async fn apply_patch(&self, id: &str, patch: ScheduledJobPatch) -> Result<ScheduledJob>;
}

/// Calendar collaborator
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn create_event(&self, draft: &CalendarEventDraft) -> Result<CalendarEventRef>;
}

/// Outbound customer email
#[async_trait]
pub trait CustomerNotifier: Send + Sync {
    async fn send(&self, message: &CustomerMessage) -> Result<()>;
}
