//! Domain types and models
//!
//! Grouped by the part of the dashboard they belong to:
//! - [`email`]: messages fetched from the mail collaborator
//! - [`extraction`]: field extraction inputs, results, and API views
//! - [`scheduling`]: job requests, scheduled jobs, calendar drafts
//! - [`records`]: estimates, board jobs, teams, notifications, overrides

pub mod email;
pub mod extraction;
pub mod records;
pub mod scheduling;

pub use email::{IngestEmailRequest, IngestOutcome, RawEmail};
pub use extraction::{
    ConfidenceModel, EmailHeaders, ExtractedFields, Extraction, ExtractionRequest,
    ExtractionStrategy, LlmExtractionView, ParsedEmail, RequestType, RuleExtractionView, Urgency,
};
pub use records::{
    Estimate, EstimatePatch, Job, JobBoardStatus, NewEstimate, NewOverride, Notification,
    OverrideAction, OverrideKind, Team,
};
pub use scheduling::{
    CalendarEventDraft, CalendarEventRef, CustomerMessage, JobRequest, JobStatus, Reminder,
    ScheduleJobRequest, ScheduleOutcome, ScheduledJob, ScheduledJobPatch, StatusUpdateRequest,
};
