//! Handler execution helpers
//!
//! Every route runs its service call through [`execute_logged`] so timing and
//! outcome land in the log with the same fields.

use std::future::Future;
use std::time::Instant;

use paneboard_domain::Result as DomainResult;

use crate::error::ApiResult;
use crate::utils::logging::log_command_execution;

/// Time a service call, log its outcome, and lift the error into an
/// [`ApiError`](crate::error::ApiError).
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result.map_err(Into::into)
}
