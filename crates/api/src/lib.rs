//! # Paneboard API
//!
//! HTTP layer for the scheduling dashboard.
//!
//! This crate contains:
//! - Route handlers (dashboard → services)
//! - Application context (dependency injection)
//! - JSON error mapping and per-request tracing spans
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the adapters from `infra` into the services from `core`

pub mod commands;
pub mod context;
pub mod error;
pub mod utils;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use context::AppContext;
pub use error::{ApiError, ApiResult};

/// Every dashboard route on one router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(commands::health))
        // Inbox and extraction
        .route("/api/emails", get(commands::list_emails))
        .route("/api/emails/parse", post(commands::ingest_email))
        .route(
            "/api/email-parsing",
            get(commands::list_email_summaries).post(commands::parse_email_by_id),
        )
        .route("/api/parse-email", post(commands::parse_email_content))
        // Jobs and scheduling
        .route("/api/jobs", get(commands::list_jobs).post(commands::create_job))
        .route("/api/jobs/schedule", post(commands::schedule_job))
        .route("/api/jobs/status", patch(commands::update_job_status))
        .route("/api/teams", get(commands::list_teams))
        // Records
        .route("/api/estimates", get(commands::list_estimates).post(commands::create_estimate))
        .route(
            "/api/estimates/{id}",
            get(commands::get_estimate).patch(commands::update_estimate),
        )
        .route(
            "/api/notifications",
            get(commands::list_notifications).post(commands::create_notification),
        )
        .route("/api/overrides", get(commands::list_overrides).post(commands::record_override))
        .layer(middleware::from_fn(utils::request_id::request_span))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
