//! External service integrations

pub mod calendar;
pub mod gmail;
pub mod google_auth;
pub mod openai;

pub use calendar::GoogleCalendarClient;
pub use gmail::GmailClient;
pub use google_auth::GoogleTokenSource;
pub use openai::{OpenAIError, OpenAIExtractor};
