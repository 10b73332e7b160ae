//! Google Calendar v3 adapter

pub mod google;
pub mod types;

pub use google::GoogleCalendarClient;
