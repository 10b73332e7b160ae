//! PostgREST-backed implementations of the core repository ports

use async_trait::async_trait;
use paneboard_core::{
    EstimateRepository, JobRepository, JobRequestRepository, NotificationRepository,
    OverrideRepository, ScheduledJobRepository, TeamRepository,
};
use paneboard_domain::{
    Estimate, EstimatePatch, Job, JobRequest, JobStatus, Notification, OverrideAction, Result,
    ScheduledJob, ScheduledJobPatch, Team,
};
use serde_json::json;
use tracing::instrument;

use super::client::PostgrestClient;

pub const JOB_REQUESTS: &str = "job_requests";
pub const SCHEDULED_JOBS: &str = "scheduled_jobs";
pub const ESTIMATES: &str = "estimates";
pub const JOBS: &str = "jobs";
pub const TEAMS: &str = "teams";
pub const NOTIFICATIONS: &str = "notifications";
pub const OVERRIDE_ACTIONS: &str = "override_actions";

macro_rules! postgrest_repository {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            client: PostgrestClient,
        }

        impl $name {
            pub fn new(client: PostgrestClient) -> Self {
                Self { client }
            }
        }
    };
}

postgrest_repository!(
    /// `job_requests` table
    PostgrestJobRequestRepository
);
postgrest_repository!(
    /// `scheduled_jobs` table
    PostgrestScheduledJobRepository
);
postgrest_repository!(
    /// `estimates` table
    PostgrestEstimateRepository
);
postgrest_repository!(PostgrestJobRepository);
postgrest_repository!(PostgrestTeamRepository);
postgrest_repository!(PostgrestNotificationRepository);
postgrest_repository!(
    /// `override_actions` table
    PostgrestOverrideRepository
);

#[async_trait]
impl JobRequestRepository for PostgrestJobRequestRepository {
    #[instrument(skip_all, fields(email_id = %request.email_id))]
    async fn create(&self, request: JobRequest) -> Result<JobRequest> {
        self.client.insert(JOB_REQUESTS, &request).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<JobRequest> {
        self.client.select_by_id(JOB_REQUESTS, id).await
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: &str, status: JobStatus) -> Result<()> {
        let _: JobRequest =
            self.client.update(JOB_REQUESTS, id, &json!({ "status": status })).await?;
        Ok(())
    }
}

#[async_trait]
impl ScheduledJobRepository for PostgrestScheduledJobRepository {
    #[instrument(skip_all, fields(job_request_id = %job.job_request_id))]
    async fn create(&self, job: ScheduledJob) -> Result<ScheduledJob> {
        self.client.insert(SCHEDULED_JOBS, &job).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<ScheduledJob> {
        self.client.select_by_id(SCHEDULED_JOBS, id).await
    }

    #[instrument(skip(self, patch))]
    async fn apply_patch(&self, id: &str, patch: ScheduledJobPatch) -> Result<ScheduledJob> {
        self.client.update(SCHEDULED_JOBS, id, &patch).await
    }
}

#[async_trait]
impl EstimateRepository for PostgrestEstimateRepository {
    async fn list(&self) -> Result<Vec<Estimate>> {
        self.client.select_recent(ESTIMATES).await
    }

    #[instrument(skip_all)]
    async fn create(&self, estimate: Estimate) -> Result<Estimate> {
        self.client.insert(ESTIMATES, &estimate).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Estimate> {
        self.client.select_by_id(ESTIMATES, id).await
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: EstimatePatch) -> Result<Estimate> {
        self.client.update(ESTIMATES, id, &patch).await
    }
}

#[async_trait]
impl JobRepository for PostgrestJobRepository {
    async fn list(&self) -> Result<Vec<Job>> {
        self.client.select_recent(JOBS).await
    }

    #[instrument(skip_all, fields(team_id = %job.team_id))]
    async fn create(&self, job: Job) -> Result<Job> {
        self.client.insert(JOBS, &job).await
    }
}

#[async_trait]
impl TeamRepository for PostgrestTeamRepository {
    async fn list(&self) -> Result<Vec<Team>> {
        self.client.select(TEAMS, &[("order", "name.asc")]).await
    }
}

#[async_trait]
impl NotificationRepository for PostgrestNotificationRepository {
    async fn list(&self) -> Result<Vec<Notification>> {
        self.client.select_recent(NOTIFICATIONS).await
    }

    async fn create(&self, notification: Notification) -> Result<Notification> {
        self.client.insert(NOTIFICATIONS, &notification).await
    }
}

#[async_trait]
impl OverrideRepository for PostgrestOverrideRepository {
    async fn list(&self) -> Result<Vec<OverrideAction>> {
        self.client.select_recent(OVERRIDE_ACTIONS).await
    }

    #[instrument(skip_all, fields(action = %action.action))]
    async fn create(&self, action: OverrideAction) -> Result<OverrideAction> {
        self.client.insert(OVERRIDE_ACTIONS, &action).await
    }
}
