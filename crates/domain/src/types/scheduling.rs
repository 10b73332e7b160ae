//! Job requests, scheduled jobs, and the calendar/notification payloads
//! derived from them
//!
//! Row types (`JobRequest`, `ScheduledJob`) keep the datastore's snake_case
//! column names. Request types coming from the dashboard are camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Lifecycle of a job request and of the scheduled job created from it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Confirmed,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Rescheduled,
}

impl_domain_status_conversions!(JobStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Scheduled => "scheduled",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
    Rescheduled => "rescheduled",
});

impl JobStatus {
    /// Statuses staff may set through a status update. `Scheduled` is only
    /// ever set by the scheduling flow itself.
    pub const fn is_assignable(self) -> bool {
        !matches!(self, Self::Scheduled)
    }

    /// Statuses that trigger a customer email when notification is requested.
    pub const fn notifies_customer(self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed | Self::Cancelled | Self::Rescheduled)
    }
}

/// Row in `job_requests`: a customer request captured from an email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub requested_date: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub estimated_size: Option<String>,
    #[serde(default)]
    pub confidence_score: f32,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub email_subject: String,
    #[serde(default)]
    pub email_body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Row in `scheduled_jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub job_request_id: String,
    pub scheduled_date: NaiveDate,
    /// Local wall-clock start, `HH:MM`.
    pub scheduled_time: String,
    /// Hours.
    pub estimated_duration: f64,
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub calendar_event_id: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub job_details: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Columns rewritten by a status update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJobPatch {
    pub status: JobStatus,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Dashboard request to put a job request on the calendar
///
/// Every field defaults so that missing values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleJobRequest {
    #[serde(default)]
    pub job_request_id: String,
    #[serde(default)]
    pub scheduled_date: String,
    #[serde(default)]
    pub scheduled_time: String,
    #[serde(default)]
    pub estimated_duration: f64,
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub job_details: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Dashboard request to move a scheduled job to a new status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[serde(default)]
    pub job_id: String,
    /// Kept as text so unknown values surface as a validation error.
    #[serde(default)]
    pub new_status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub notify_customer: bool,
}

/// Calendar reminder override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub method: String,
    pub minutes: u32,
}

impl Reminder {
    pub fn email(minutes: u32) -> Self {
        Self { method: "email".to_string(), minutes }
    }

    pub fn popup(minutes: u32) -> Self {
        Self { method: "popup".to_string(), minutes }
    }
}

/// Provider-neutral description of a calendar event to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDraft {
    pub summary: String,
    pub location: Option<String>,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA zone the event is displayed in.
    pub time_zone: String,
    pub attendees: Vec<String>,
    pub reminders: Vec<Reminder>,
}

/// What the calendar provider returns for a created event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventRef {
    pub id: String,
    #[serde(default)]
    pub html_link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcome {
    pub scheduled_job: ScheduledJob,
    pub calendar_event: CalendarEventRef,
}

/// Outbound HTML email to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

fn default_true() -> bool {
    true
}
