//! # Paneboard Domain
//!
//! Business domain types and models for Paneboard.
//!
//! This crate contains:
//! - Email, extraction, and scheduling record types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and small pure helpers (sender parsing, text cleanup)
//!
//! ## Architecture
//! - No dependencies on other Paneboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::sender::{parse_sender, SenderAddress};
