//! Job scheduling service - calendar booking and status transitions

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use paneboard_domain::constants::{
    EMAIL_REMINDER_MINUTES, MAX_JOB_DURATION_HOURS, POPUP_REMINDER_MINUTES,
};
use paneboard_domain::{
    CalendarEventDraft, CustomerMessage, JobRequest, JobStatus, PaneboardError, Reminder, Result,
    ScheduleJobRequest, ScheduleOutcome, ScheduledJob, ScheduledJobPatch, StatusUpdateRequest,
};
use tracing::{info, instrument, warn};

use super::notifications::render_status_email;
use super::ports::{
    CalendarProvider, CustomerNotifier, JobRequestRepository, ScheduledJobRepository,
};

/// Settings the scheduling service needs from configuration
#[derive(Debug, Clone)]
pub struct SchedulingSettings {
    pub timezone: Tz,
    pub business_name: String,
}

impl SchedulingSettings {
    /// Fails with `Config` when `timezone` is not an IANA zone name.
    pub fn new(timezone: &str, business_name: impl Into<String>) -> Result<Self> {
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| PaneboardError::Config(format!("Unknown timezone: {timezone}")))?;
        Ok(Self { timezone, business_name: business_name.into() })
    }
}

/// Books job requests onto the calendar and moves scheduled jobs through
/// their lifecycle
pub struct SchedulingService {
    job_requests: Arc<dyn JobRequestRepository>,
    scheduled_jobs: Arc<dyn ScheduledJobRepository>,
    calendar: Arc<dyn CalendarProvider>,
    notifier: Arc<dyn CustomerNotifier>,
    settings: SchedulingSettings,
}

impl SchedulingService {
    pub fn new(
        job_requests: Arc<dyn JobRequestRepository>,
        scheduled_jobs: Arc<dyn ScheduledJobRepository>,
        calendar: Arc<dyn CalendarProvider>,
        notifier: Arc<dyn CustomerNotifier>,
        settings: SchedulingSettings,
    ) -> Self {
        Self { job_requests, scheduled_jobs, calendar, notifier, settings }
    }

    /// Create the calendar event and scheduled job for a job request, then
    /// mark the request `scheduled`.
    #[instrument(skip(self, request), fields(job_request_id = %request.job_request_id))]
    pub async fn schedule(&self, request: ScheduleJobRequest) -> Result<ScheduleOutcome> {
        let slot = ScheduleSlot::parse(&request, self.settings.timezone)?;
        let job_request = self.job_requests.find_by_id(&request.job_request_id).await?;

        let draft = self.event_draft(&job_request, &request, &slot);
        let event = self.calendar.create_event(&draft).await?;
        info!(event_id = %event.id, start = %slot.start, "Calendar event created");

        let job = ScheduledJob {
            id: None,
            job_request_id: request.job_request_id.clone(),
            scheduled_date: slot.date,
            scheduled_time: request.scheduled_time.trim().to_string(),
            estimated_duration: request.estimated_duration,
            assigned_staff: non_blank(request.assigned_staff.as_deref()),
            calendar_event_id: Some(event.id.clone()),
            status: request.status.unwrap_or(JobStatus::Scheduled),
            job_details: non_blank(request.job_details.as_deref()),
            notes: None,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        let scheduled_job = self.scheduled_jobs.create(job).await?;

        self.job_requests.update_status(&request.job_request_id, JobStatus::Scheduled).await?;

        Ok(ScheduleOutcome { scheduled_job, calendar_event: event })
    }

    pub async fn update_status(&self, request: StatusUpdateRequest) -> Result<ScheduledJob> {
        self.update_status_at(request, Utc::now()).await
    }

    /// Status update with an explicit clock, used for the note timestamp.
    #[instrument(skip(self, request, now), fields(job_id = %request.job_id, status = %request.new_status))]
    pub async fn update_status_at(
        &self,
        request: StatusUpdateRequest,
        now: DateTime<Utc>,
    ) -> Result<ScheduledJob> {
        if request.job_id.trim().is_empty() || request.new_status.trim().is_empty() {
            return Err(PaneboardError::InvalidInput("Missing required information".to_string()));
        }

        let status = request
            .new_status
            .parse::<JobStatus>()
            .ok()
            .filter(|status| status.is_assignable())
            .ok_or_else(|| PaneboardError::InvalidInput("Invalid status value".to_string()))?;

        let job = self.scheduled_jobs.find_by_id(&request.job_id).await?;

        let notify = request.notify_customer && status.notifies_customer();
        let customer = if notify {
            Some(self.job_requests.find_by_id(&job.job_request_id).await?)
        } else {
            None
        };

        let patch = ScheduledJobPatch {
            status,
            notes: append_note(job.notes.as_deref(), request.notes.as_deref(), now),
            updated_at: now,
        };
        let updated = self.scheduled_jobs.apply_patch(&request.job_id, patch).await?;
        info!(status = %status, "Scheduled job status updated");

        if let Some(customer) = customer {
            self.notify_customer(status, &customer, &updated).await;
        }

        Ok(updated)
    }

    async fn notify_customer(&self, status: JobStatus, customer: &JobRequest, job: &ScheduledJob) {
        let Some(to) = non_blank(customer.customer_email.as_deref()) else {
            warn!(job_request_id = ?customer.id, "No customer email on file; skipping notification");
            return;
        };

        let Some(email) = render_status_email(
            status,
            &customer.customer_name,
            job.scheduled_date,
            &job.scheduled_time,
            &self.settings.business_name,
        ) else {
            return;
        };

        let message = CustomerMessage { to, subject: email.subject, html_body: email.html_body };
        match self.notifier.send(&message).await {
            Ok(()) => info!(status = %status, "Customer notified of status change"),
            Err(err) => warn!(error = %err, "Failed to send status notification"),
        }
    }

    fn event_draft(
        &self,
        job_request: &JobRequest,
        request: &ScheduleJobRequest,
        slot: &ScheduleSlot,
    ) -> CalendarEventDraft {
        let staff = non_blank(request.assigned_staff.as_deref());
        let description = [
            format!("Service: {}", or_default(job_request.service_type.as_deref(), "Not specified")),
            format!("Customer: {}", job_request.customer_name),
            format!("Email: {}", or_default(job_request.customer_email.as_deref(), "Not provided")),
            format!(
                "Special Instructions: {}",
                or_default(job_request.special_instructions.as_deref(), "None")
            ),
            format!(
                "Estimated Size: {}",
                or_default(job_request.estimated_size.as_deref(), "Not specified")
            ),
            format!("Assigned Staff: {}", or_default(staff.as_deref(), "TBD")),
            format!("Additional Details: {}", or_default(request.job_details.as_deref(), "None")),
        ]
        .join("\n");

        CalendarEventDraft {
            summary: format!("Window Cleaning - {}", job_request.customer_name),
            location: non_blank(job_request.address.as_deref()),
            description,
            start: slot.start,
            end: slot.end,
            time_zone: self.settings.timezone.name().to_string(),
            attendees: staff.into_iter().collect(),
            reminders: vec![
                Reminder::email(EMAIL_REMINDER_MINUTES),
                Reminder::popup(POPUP_REMINDER_MINUTES),
            ],
        }
    }
}

/// Validated start/end of a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ScheduleSlot {
    /// Interpret the request's local date and time in `tz`.
    pub fn parse(request: &ScheduleJobRequest, tz: Tz) -> Result<Self> {
        let missing = request.job_request_id.trim().is_empty()
            || request.scheduled_date.trim().is_empty()
            || request.scheduled_time.trim().is_empty()
            || request.estimated_duration == 0.0;
        if missing {
            return Err(PaneboardError::InvalidInput(
                "Missing required job information".to_string(),
            ));
        }

        let date = NaiveDate::parse_from_str(request.scheduled_date.trim(), "%Y-%m-%d").map_err(
            |_| PaneboardError::InvalidInput("Scheduled date must be YYYY-MM-DD".to_string()),
        )?;
        let time = parse_time(request.scheduled_time.trim()).ok_or_else(|| {
            PaneboardError::InvalidInput("Scheduled time must be HH:MM".to_string())
        })?;

        let hours = request.estimated_duration;
        if !hours.is_finite() || hours < 0.0 {
            return Err(PaneboardError::InvalidInput(
                "Estimated duration must be a positive number of hours".to_string(),
            ));
        }
        if hours > MAX_JOB_DURATION_HOURS {
            return Err(PaneboardError::InvalidInput(format!(
                "Estimated duration cannot exceed {MAX_JOB_DURATION_HOURS} hours"
            )));
        }

        let local = NaiveDateTime::new(date, time);
        let start = tz.from_local_datetime(&local).earliest().ok_or_else(|| {
            PaneboardError::InvalidInput(format!("{local} does not exist in {}", tz.name()))
        })?;

        // Sub-second precision is irrelevant for calendar bookings.
        #[allow(clippy::cast_possible_truncation)]
        let millis = (hours * 3_600_000.0).round() as i64;
        let start = start.with_timezone(&Utc);
        let end = Duration::try_milliseconds(millis)
            .and_then(|length| start.checked_add_signed(length))
            .ok_or_else(|| {
                PaneboardError::InvalidInput("Booking ends outside the supported range".to_string())
            })?;

        Ok(Self { date, start, end })
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// `previous` plus a new `"<RFC3339>: <note>"` line; unchanged for a blank note.
pub fn append_note(
    previous: Option<&str>,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Option<String> {
    let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) else {
        return previous.map(str::to_string);
    };

    let entry = format!("{}: {note}", now.to_rfc3339());
    match previous.filter(|p| !p.is_empty()) {
        Some(previous) => Some(format!("{previous}\n{entry}")),
        None => Some(entry),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback)
}
