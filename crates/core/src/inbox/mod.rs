//! Unread mail listing, parsing, and ingestion into job requests

pub mod ports;
pub mod service;

pub use service::InboxService;
