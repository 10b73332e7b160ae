//! Job scheduling: calendar booking, status transitions, customer emails

pub mod notifications;
pub mod ports;
pub mod service;

pub use service::{SchedulingService, SchedulingSettings};
