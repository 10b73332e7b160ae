//! Cross-cutting utilities shared across Paneboard crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `runtime`: async retry with exponential backoff
//! - `observability`: tracing subscriber initialisation for binaries

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod resilience;

// Observability tier
// --------------------------------------------------------------------
#[cfg(feature = "observability")]
pub mod observability;

#[cfg(feature = "runtime")]
pub use resilience::{
    with_retry, BackoffStrategy, RetryConfig, RetryConfigBuilder, RetryDecision, RetryError,
    RetryExecutor, RetryOutcome, RetryPolicy, RetryResult,
};
