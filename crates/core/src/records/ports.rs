//! Port interfaces for dashboard record storage

use async_trait::async_trait;
use paneboard_domain::{Estimate, EstimatePatch, Job, Notification, OverrideAction, Result, Team};

#[async_trait]
pub trait EstimateRepository: Send + Sync {
    /// All estimates, newest first.
    async fn list(&self) -> Result<Vec<Estimate>>;

    async fn create(&self, estimate: Estimate) -> Result<Estimate>;

    /// Fails with `NotFound` when no row has this id.
    async fn find_by_id(&self, id: &str) -> Result<Estimate>;

    /// Fails with `NotFound` when no row has this id.
    async fn update(&self, id: &str, patch: EstimatePatch) -> Result<Estimate>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Job>>;

    async fn create(&self, job: Job) -> Result<Job>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Notification>>;

    async fn create(&self, notification: Notification) -> Result<Notification>;
}

#[async_trait]
pub trait OverrideRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<OverrideAction>>;

    async fn create(&self, action: OverrideAction) -> Result<OverrideAction>;
}
