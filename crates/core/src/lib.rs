//! # Paneboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The email field extractor (rule table, confidence, strategy trait)
//! - Port/adapter interfaces (traits) for mail, calendar, datastore, notifier
//! - Services: inbox parsing, job scheduling, dashboard records
//!
//! ## Architecture Principles
//! - Only depends on `paneboard-common` and `paneboard-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod extraction;
pub mod inbox;
pub mod records;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use extraction::{finish_extraction, FieldExtractor, RuleBasedExtractor};
pub use inbox::ports::MailProvider;
pub use inbox::InboxService;
pub use records::ports::{
    EstimateRepository, JobRepository, NotificationRepository, OverrideRepository, TeamRepository,
};
pub use records::{RecordRepositories, RecordsService};
pub use scheduling::ports::{
    CalendarProvider, CustomerNotifier, JobRequestRepository, ScheduledJobRepository,
};
pub use scheduling::{SchedulingService, SchedulingSettings};
