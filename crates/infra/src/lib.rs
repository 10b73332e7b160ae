//! # Paneboard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client with retry
//! - Configuration loading (environment, `.env`, TOML/JSON files)
//! - External service integrations (Gmail, Google Calendar, OpenAI)
//! - Supabase PostgREST repositories
//!
//! ## Architecture
//! - Implements traits defined in `paneboard-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod datastore;
pub mod errors;
pub mod http;
pub mod integrations;

pub use datastore::{record_repositories, PostgrestClient};
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::*;
