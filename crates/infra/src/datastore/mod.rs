//! Supabase PostgREST storage for dashboard rows

pub mod client;
pub mod repositories;

use std::sync::Arc;

use paneboard_core::RecordRepositories;

pub use client::PostgrestClient;
pub use repositories::{
    PostgrestEstimateRepository, PostgrestJobRepository, PostgrestJobRequestRepository,
    PostgrestNotificationRepository, PostgrestOverrideRepository,
    PostgrestScheduledJobRepository, PostgrestTeamRepository,
};

/// Record repositories sharing one client.
pub fn record_repositories(client: &PostgrestClient) -> RecordRepositories {
    RecordRepositories {
        estimates: Arc::new(PostgrestEstimateRepository::new(client.clone())),
        jobs: Arc::new(PostgrestJobRepository::new(client.clone())),
        teams: Arc::new(PostgrestTeamRepository::new(client.clone())),
        notifications: Arc::new(PostgrestNotificationRepository::new(client.clone())),
        overrides: Arc::new(PostgrestOverrideRepository::new(client.clone())),
    }
}
