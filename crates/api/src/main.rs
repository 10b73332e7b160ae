//! Paneboard - scheduling dashboard back end
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use paneboard_api::{router, AppContext};
use paneboard_common::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging first so configuration problems are visible
    init_tracing();

    let config = paneboard_infra::config::load().context("failed to load configuration")?;
    let ctx = AppContext::new(&config).context("failed to build application context")?;

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, version = env!("CARGO_PKG_VERSION"), "Paneboard listening");
    axum::serve(listener, router(Arc::new(ctx)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Paneboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
