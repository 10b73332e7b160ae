//! Records service integration tests.

mod support;

use std::sync::Arc;

use paneboard_core::{RecordRepositories, RecordsService};
use paneboard_domain::{
    EstimatePatch, Job, JobBoardStatus, NewEstimate, NewOverride, OverrideKind, PaneboardError,
    Team,
};
use support::repositories::{
    InMemoryEstimates, InMemoryJobs, InMemoryNotifications, InMemoryOverrides, StaticTeams,
};

struct Harness {
    notifications: Arc<InMemoryNotifications>,
    service: RecordsService,
}

fn harness() -> Harness {
    let notifications = Arc::new(InMemoryNotifications::default());
    let repos = RecordRepositories {
        estimates: Arc::new(InMemoryEstimates::default()),
        jobs: Arc::new(InMemoryJobs::default()),
        teams: Arc::new(StaticTeams(vec![Team {
            id: "t-1".into(),
            name: "North crew".into(),
            members: vec!["Ana".into(), "Raj".into()],
        }])),
        notifications: notifications.clone(),
        overrides: Arc::new(InMemoryOverrides::default()),
    };
    Harness { notifications, service: RecordsService::new(repos) }
}

fn new_estimate(name: &str, amount: &str) -> NewEstimate {
    NewEstimate {
        name: name.into(),
        address: "14 Birch Lane".into(),
        details: "Two storey, 24 panes".into(),
        amount: amount.into(),
    }
}

#[tokio::test]
async fn created_estimates_start_pending_and_list_newest_first() {
    let h = harness();

    let first = h.service.create_estimate(new_estimate("Jane Doe", "180")).await.unwrap();
    let second = h.service.create_estimate(new_estimate("Sam Ortiz", "95.50")).await.unwrap();

    assert_eq!(first.status, "pending");
    assert!(first.id.is_some());

    let listed = h.service.list_estimates().await.unwrap();
    let names: Vec<_> = listed.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Sam Ortiz", "Jane Doe"]);
    assert_eq!(listed[0].id, second.id);
}

#[tokio::test]
async fn estimate_requires_name_address_amount() {
    let h = harness();

    let err = h.service.create_estimate(new_estimate("", "180")).await.unwrap_err();

    assert_eq!(
        err,
        PaneboardError::InvalidInput("Name, address, and amount are required fields".into())
    );
}

#[tokio::test]
async fn estimate_lookup_and_patch() {
    let h = harness();
    let created = h.service.create_estimate(new_estimate("Jane Doe", "180")).await.unwrap();
    let id = created.id.unwrap();

    let patched = h
        .service
        .update_estimate(
            &id,
            EstimatePatch {
                amount: Some("210".into()),
                status: Some("accepted".into()),
                ..EstimatePatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(patched.amount, "210");
    assert_eq!(patched.status, "accepted");
    assert_eq!(h.service.get_estimate(&id).await.unwrap(), patched);
}

#[tokio::test]
async fn missing_estimate_is_not_found() {
    let h = harness();

    let err = h.service.get_estimate("est-404").await.unwrap_err();
    assert_eq!(err, PaneboardError::NotFound("Estimate not found".into()));

    let patch = EstimatePatch { amount: Some("1".into()), ..EstimatePatch::default() };
    let err = h.service.update_estimate("est-404", patch).await.unwrap_err();
    assert_eq!(err, PaneboardError::NotFound("Estimate not found".into()));
}

#[tokio::test]
async fn empty_patch_is_rejected() {
    let h = harness();

    let err = h.service.update_estimate("est-1", EstimatePatch::default()).await.unwrap_err();

    assert!(matches!(err, PaneboardError::InvalidInput(_)));
}

#[tokio::test]
async fn jobs_and_teams_round_trip() {
    let h = harness();

    let job = h
        .service
        .create_job(Job {
            id: Some("client-chosen".into()),
            team_id: "t-1".into(),
            job_name: "Birch Lane windows".into(),
            date: "2025-05-05".into(),
            status: JobBoardStatus::Scheduled,
            created_at: None,
        })
        .await
        .unwrap();

    assert_ne!(job.id.as_deref(), Some("client-chosen"));
    assert_eq!(h.service.list_jobs().await.unwrap(), vec![job]);
    assert_eq!(h.service.list_teams().await.unwrap()[0].members, ["Ana", "Raj"]);
}

#[tokio::test]
async fn job_without_team_is_rejected() {
    let h = harness();

    let err = h
        .service
        .create_job(Job {
            id: None,
            team_id: " ".into(),
            job_name: "x".into(),
            date: "2025-05-05".into(),
            status: JobBoardStatus::Scheduled,
            created_at: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PaneboardError::InvalidInput(_)));
}

#[tokio::test]
async fn overrides_are_labelled_and_announced() {
    let h = harness();

    let recorded = h
        .service
        .record_override(NewOverride {
            action: "job-reassign".into(),
            target_id: Some("job-1".into()),
            reason: Some("Crew out sick".into()),
        })
        .await
        .unwrap();

    assert_eq!(recorded.action, OverrideKind::JobReassign);
    assert_eq!(recorded.label, OverrideKind::JobReassign.label());
    assert_eq!(h.service.list_overrides().await.unwrap().len(), 1);

    let feed = h.notifications.rows.lock().unwrap().clone();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].message, format!("Override: {}", OverrideKind::JobReassign.label()));
    assert!(!feed[0].read);
}

#[tokio::test]
async fn unknown_override_action_is_rejected() {
    let h = harness();

    let err = h
        .service
        .record_override(NewOverride { action: "launch-rocket".into(), target_id: None, reason: None })
        .await
        .unwrap_err();

    assert!(matches!(err, PaneboardError::InvalidInput(_)));
    assert!(h.notifications.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn notifications_are_created_unread() {
    let h = harness();

    let created = h.service.create_notification("  Crew running late  ").await.unwrap();

    assert_eq!(created.message, "Crew running late");
    assert!(!created.read);
    assert_eq!(h.service.list_notifications().await.unwrap().len(), 1);
    assert!(h.service.create_notification("   ").await.is_err());
}
