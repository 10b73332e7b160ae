//! Scheduling service integration tests.

mod support;

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use paneboard_core::{SchedulingService, SchedulingSettings};
use paneboard_domain::{
    JobRequest, JobStatus, PaneboardError, ScheduleJobRequest, ScheduledJob, StatusUpdateRequest,
};
use support::collaborators::{RecordingCalendar, RecordingNotifier};
use support::repositories::{InMemoryJobRequests, InMemoryScheduledJobs};

struct Harness {
    requests: Arc<InMemoryJobRequests>,
    jobs: Arc<InMemoryScheduledJobs>,
    calendar: Arc<RecordingCalendar>,
    notifier: Arc<RecordingNotifier>,
    service: SchedulingService,
}

fn job_request() -> JobRequest {
    JobRequest {
        id: Some("jr-1".into()),
        email_id: "gm-1".into(),
        customer_name: "Jane Doe".into(),
        customer_email: Some("jane@example.com".into()),
        service_type: Some("window cleaning".into()),
        address: Some("14 Birch Lane".into()),
        requested_date: Some("May 5".into()),
        special_instructions: None,
        estimated_size: None,
        confidence_score: 1.0,
        status: JobStatus::Pending,
        email_subject: "Windows".into(),
        email_body: "please".into(),
        created_at: None,
    }
}

fn scheduled_job(notes: Option<&str>) -> ScheduledJob {
    ScheduledJob {
        id: Some("sj-1".into()),
        job_request_id: "jr-1".into(),
        scheduled_date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        scheduled_time: "09:30".into(),
        estimated_duration: 2.0,
        assigned_staff: None,
        calendar_event_id: Some("evt-1".into()),
        status: JobStatus::Scheduled,
        job_details: None,
        notes: notes.map(str::to_string),
        created_at: None,
        updated_at: None,
    }
}

fn harness_with(notifier: RecordingNotifier, jobs: Vec<ScheduledJob>) -> Harness {
    let requests = Arc::new(InMemoryJobRequests::with(vec![job_request()]));
    let jobs = Arc::new(InMemoryScheduledJobs::with(jobs));
    let calendar = Arc::new(RecordingCalendar::default());
    let notifier = Arc::new(notifier);
    let settings = SchedulingSettings::new("America/New_York", "Crystal Clear").unwrap();
    let service = SchedulingService::new(
        requests.clone(),
        jobs.clone(),
        calendar.clone(),
        notifier.clone(),
        settings,
    );
    Harness { requests, jobs, calendar, notifier, service }
}

fn harness() -> Harness {
    harness_with(RecordingNotifier::default(), vec![scheduled_job(None)])
}

fn booking() -> ScheduleJobRequest {
    ScheduleJobRequest {
        job_request_id: "jr-1".into(),
        scheduled_date: "2025-05-05".into(),
        scheduled_time: "09:30".into(),
        estimated_duration: 2.5,
        assigned_staff: Some("crew@example.com".into()),
        job_details: Some("Bring the tall ladder".into()),
        status: None,
    }
}

fn status_update(status: &str, notes: Option<&str>) -> StatusUpdateRequest {
    StatusUpdateRequest {
        job_id: "sj-1".into(),
        new_status: status.into(),
        notes: notes.map(str::to_string),
        notify_customer: true,
    }
}

#[tokio::test]
async fn schedule_books_calendar_and_marks_request() {
    let h = harness();

    let outcome = h.service.schedule(booking()).await.unwrap();

    let drafts = h.calendar.drafts.lock().unwrap().clone();
    assert_eq!(drafts.len(), 1);
    let draft = &drafts[0];
    assert_eq!(draft.summary, "Window Cleaning - Jane Doe");
    assert_eq!(draft.location.as_deref(), Some("14 Birch Lane"));
    assert_eq!(draft.start, Utc.with_ymd_and_hms(2025, 5, 5, 13, 30, 0).unwrap());
    assert_eq!(draft.end, Utc.with_ymd_and_hms(2025, 5, 5, 16, 0, 0).unwrap());
    assert_eq!(draft.time_zone, "America/New_York");
    assert_eq!(draft.attendees, ["crew@example.com"]);
    assert!(draft.description.contains("Service: window cleaning"));
    assert!(draft.description.contains("Assigned Staff: crew@example.com"));
    assert!(draft.description.contains("Additional Details: Bring the tall ladder"));
    let reminders: Vec<_> = draft.reminders.iter().map(|r| (r.method.as_str(), r.minutes)).collect();
    assert_eq!(reminders, [("email", 1440), ("popup", 60)]);

    let job = &outcome.scheduled_job;
    assert_eq!(job.calendar_event_id.as_deref(), Some(outcome.calendar_event.id.as_str()));
    assert_eq!(job.status, JobStatus::Scheduled);
    assert_eq!(job.scheduled_date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());

    assert_eq!(h.requests.snapshot()[0].status, JobStatus::Scheduled);
    assert_eq!(h.jobs.snapshot().len(), 2);
}

#[tokio::test]
async fn schedule_rejects_incomplete_request() {
    let h = harness();

    let err = h
        .service
        .schedule(ScheduleJobRequest { scheduled_time: String::new(), ..booking() })
        .await
        .unwrap_err();

    assert_eq!(err, PaneboardError::InvalidInput("Missing required job information".into()));
    assert!(h.calendar.drafts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn schedule_rejects_absurd_duration_before_booking() {
    let h = harness();

    let err = h
        .service
        .schedule(ScheduleJobRequest { estimated_duration: 1e12, ..booking() })
        .await
        .unwrap_err();

    assert!(matches!(err, PaneboardError::InvalidInput(_)));
    assert!(h.calendar.drafts.lock().unwrap().is_empty());
    assert_eq!(h.jobs.snapshot().len(), 1);
}

#[tokio::test]
async fn schedule_unknown_request_is_not_found() {
    let h = harness();

    let err = h
        .service
        .schedule(ScheduleJobRequest { job_request_id: "jr-404".into(), ..booking() })
        .await
        .unwrap_err();

    assert!(matches!(err, PaneboardError::NotFound(_)));
    assert!(h.calendar.drafts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn confirmed_status_notifies_customer() {
    let h = harness();
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 15, 0, 0).unwrap();

    let updated = h
        .service
        .update_status_at(status_update("confirmed", Some("Called ahead")), now)
        .await
        .unwrap();

    assert_eq!(updated.status, JobStatus::Confirmed);
    assert_eq!(updated.notes.as_deref(), Some("2025-05-01T15:00:00+00:00: Called ahead"));
    assert_eq!(updated.updated_at, Some(now));

    let sent = h.notifier.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@example.com");
    assert_eq!(sent[0].subject, "Job Confirmed: Window Cleaning Service");
    assert!(sent[0].html_body.contains("Monday, May 5, 2025"));
    assert!(sent[0].html_body.contains("09:30"));
    assert!(sent[0].html_body.contains("Crystal Clear Team"));
}

#[tokio::test]
async fn in_progress_status_sends_nothing() {
    let h = harness();

    h.service.update_status(status_update("in_progress", None)).await.unwrap();

    assert!(h.notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn notification_can_be_suppressed() {
    let h = harness();

    let request = StatusUpdateRequest { notify_customer: false, ..status_update("completed", None) };
    h.service.update_status(request).await.unwrap();

    assert!(h.notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn notifier_failure_does_not_fail_update() {
    let h = harness_with(RecordingNotifier::failing(), vec![scheduled_job(None)]);

    let updated = h.service.update_status(status_update("cancelled", None)).await.unwrap();

    assert_eq!(updated.status, JobStatus::Cancelled);
    assert_eq!(h.jobs.snapshot()[0].status, JobStatus::Cancelled);
}

#[tokio::test]
async fn notes_accumulate_across_updates() {
    let h = harness_with(RecordingNotifier::default(), vec![scheduled_job(Some("Gate code 1234"))]);
    let now = Utc.with_ymd_and_hms(2025, 5, 5, 17, 45, 0).unwrap();

    let updated = h
        .service
        .update_status_at(status_update("completed", Some("All panes done")), now)
        .await
        .unwrap();

    assert_eq!(
        updated.notes.as_deref(),
        Some("Gate code 1234\n2025-05-05T17:45:00+00:00: All panes done")
    );
}

#[tokio::test]
async fn invalid_status_values_are_rejected() {
    let h = harness();

    for status in ["done", "scheduled"] {
        let err = h.service.update_status(status_update(status, None)).await.unwrap_err();
        assert_eq!(err, PaneboardError::InvalidInput("Invalid status value".into()), "{status}");
    }

    let err = h.service.update_status(status_update("", None)).await.unwrap_err();
    assert_eq!(err, PaneboardError::InvalidInput("Missing required information".into()));
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let h = harness();

    let request = StatusUpdateRequest { job_id: "sj-404".into(), ..status_update("confirmed", None) };
    let err = h.service.update_status(request).await.unwrap_err();

    assert!(matches!(err, PaneboardError::NotFound(_)));
}
