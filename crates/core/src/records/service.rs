//! Records service - thin CRUD over the dashboard tables

use std::sync::Arc;

use paneboard_domain::{
    Estimate, EstimatePatch, Job, NewEstimate, NewOverride, Notification, OverrideAction,
    OverrideKind, PaneboardError, Result, Team,
};
use tracing::{info, warn};

use super::ports::{
    EstimateRepository, JobRepository, NotificationRepository, OverrideRepository, TeamRepository,
};

/// Repositories backing [`RecordsService`]
#[derive(Clone)]
pub struct RecordRepositories {
    pub estimates: Arc<dyn EstimateRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub overrides: Arc<dyn OverrideRepository>,
}

pub struct RecordsService {
    repos: RecordRepositories,
}

impl RecordsService {
    pub fn new(repos: RecordRepositories) -> Self {
        Self { repos }
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.repos.jobs.list().await
    }

    pub async fn create_job(&self, job: Job) -> Result<Job> {
        if [&job.team_id, &job.job_name, &job.date].iter().any(|v| v.trim().is_empty()) {
            return Err(PaneboardError::InvalidInput(
                "Team, job name, and date are required fields".to_string(),
            ));
        }
        self.repos.jobs.create(Job { id: None, created_at: None, ..job }).await
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.repos.teams.list().await
    }

    pub async fn list_estimates(&self) -> Result<Vec<Estimate>> {
        self.repos.estimates.list().await
    }

    pub async fn create_estimate(&self, estimate: NewEstimate) -> Result<Estimate> {
        estimate.validate()?;
        let created = self.repos.estimates.create(estimate.into_estimate()).await?;
        info!(estimate_id = ?created.id, "Estimate created");
        Ok(created)
    }

    pub async fn get_estimate(&self, id: &str) -> Result<Estimate> {
        self.repos.estimates.find_by_id(id).await.map_err(estimate_not_found)
    }

    pub async fn update_estimate(&self, id: &str, patch: EstimatePatch) -> Result<Estimate> {
        if patch.is_empty() {
            return Err(PaneboardError::InvalidInput("No estimate fields to update".to_string()));
        }
        self.repos.estimates.update(id, patch).await.map_err(estimate_not_found)
    }

    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.repos.notifications.list().await
    }

    pub async fn create_notification(&self, message: &str) -> Result<Notification> {
        let message = message.trim();
        if message.is_empty() {
            return Err(PaneboardError::InvalidInput(
                "Notification message is required".to_string(),
            ));
        }
        self.repos.notifications.create(Notification::unread(message)).await
    }

    pub async fn list_overrides(&self) -> Result<Vec<OverrideAction>> {
        self.repos.overrides.list().await
    }

    /// Record a manual override and announce it on the notification feed.
    pub async fn record_override(&self, request: NewOverride) -> Result<OverrideAction> {
        let kind: OverrideKind = request.action.parse().map_err(|_| {
            PaneboardError::InvalidInput(format!("Unknown override action: {}", request.action))
        })?;

        let action = OverrideAction {
            id: None,
            action: kind,
            label: kind.label().to_string(),
            target_id: request.target_id,
            reason: request.reason.filter(|r| !r.trim().is_empty()),
            created_at: None,
        };
        let recorded = self.repos.overrides.create(action).await?;
        info!(action = %kind, target_id = ?recorded.target_id, "Override recorded");

        let announcement = Notification::unread(format!("Override: {}", kind.label()));
        if let Err(err) = self.repos.notifications.create(announcement).await {
            warn!(error = %err, "Failed to record override notification");
        }

        Ok(recorded)
    }
}

fn estimate_not_found(err: PaneboardError) -> PaneboardError {
    match err {
        PaneboardError::NotFound(_) => PaneboardError::NotFound("Estimate not found".to_string()),
        other => other,
    }
}
