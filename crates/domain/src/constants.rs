//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Extraction vocabulary
pub const ESTIMATE_TERMS: &[&str] = &["estimate", "quote", "price"];
pub const URGENCY_TERMS: &[&str] =
    &["urgent", "asap", "as soon as possible", "tomorrow", "today", "emergency"];

// Weighted confidence model
pub const NAME_CONFIDENCE_WEIGHT: f32 = 0.3;
pub const ADDRESS_CONFIDENCE_WEIGHT: f32 = 0.4;
pub const PHONE_CONFIDENCE_WEIGHT: f32 = 0.3;

// Mail collaborator defaults
pub const DEFAULT_UNREAD_QUERY: &str = "is:unread";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const NO_SUBJECT: &str = "No Subject";
pub const UNKNOWN_SENDER: &str = "Unknown Sender";
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

// Scheduling defaults
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const EMAIL_REMINDER_MINUTES: u32 = 24 * 60;
pub const POPUP_REMINDER_MINUTES: u32 = 60;
/// Longest single booking, in hours.
pub const MAX_JOB_DURATION_HOURS: f64 = 24.0;

// Outbound notification branding
pub const DEFAULT_BUSINESS_NAME: &str = "Parker's Window Cleaning";
