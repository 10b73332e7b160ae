//! Resilience patterns for transient collaborator failures
//!
//! Only retry lives here. The inbox service wraps mail reads in
//! [`with_retry`], and the infra HTTP client drives replayable requests
//! through [`RetryExecutor`]. Both retry transport-level failures only.

pub mod retry;

pub use retry::{
    policies, with_retry, BackoffStrategy, InvalidRetryConfig, RetryConfig, RetryConfigBuilder,
    RetryDecision, RetryError, RetryExecutor, RetryOutcome, RetryPolicy, RetryResult,
};
