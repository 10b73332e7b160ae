//! OpenAI integration for LLM field extraction
//!
//! [`OpenAIExtractor`] calls the Chat Completions API with a single forced
//! function, `extractSchedulingInfo`, and hands the arguments to the same
//! finishing step the rule strategy uses.
//!
//! # Error Handling
//!
//! - **Network errors and 5xx**: never retried here (the completion is a
//!   `POST`, which `HttpClient` sends once); surfaced as `Network`
//! - **401/403**: `Auth`
//! - **429**: `Network`, with the server's `retry-after` when present
//! - **No function call or bad arguments**: `ExtractionUnavailable`
pub mod client;
pub mod types;

pub use client::OpenAIExtractor;
pub use types::OpenAIError;
