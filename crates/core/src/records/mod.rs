//! Estimates, board jobs, teams, notifications, and the override log

pub mod ports;
pub mod service;

pub use service::{RecordRepositories, RecordsService};
