use std::time::Duration;

use paneboard_domain::PaneboardError;
use tracing::{info, warn};

/// Log the outcome of a handler with structured fields.
///
/// `command` is a stable identifier such as `"estimates::create"`; never pass
/// request data through it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `PaneboardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PaneboardError) -> &'static str {
    match error {
        PaneboardError::Database(_) => "database",
        PaneboardError::Config(_) => "config",
        PaneboardError::Network(_) => "network",
        PaneboardError::Auth(_) => "auth",
        PaneboardError::NotFound(_) => "not_found",
        PaneboardError::InvalidInput(_) => "invalid_input",
        PaneboardError::ExtractionUnavailable(_) => "extraction_unavailable",
        PaneboardError::Internal(_) => "internal",
    }
}
