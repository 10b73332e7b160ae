//! Conversions from external infrastructure errors into domain errors.

use paneboard_domain::PaneboardError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PaneboardError);

impl From<InfraError> for PaneboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PaneboardError> for InfraError {
    fn from(value: PaneboardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPaneboardError {
    fn into_paneboard(self) -> PaneboardError;
}

/* -------------------------------------------------------------------------- */
/* HTTP status → PaneboardError */
/* -------------------------------------------------------------------------- */

/// Map a non-success HTTP status to a domain error. `detail` is appended to
/// the status line when non-empty (typically the response body).
pub fn status_error(status: StatusCode, detail: &str) -> PaneboardError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    let detail = detail.trim();
    if !detail.is_empty() {
        message.push_str(": ");
        message.push_str(detail);
    }

    match code {
        401 | 403 => PaneboardError::Auth(message),
        404 => PaneboardError::NotFound(message),
        429 => PaneboardError::Network(message),
        400..=499 => PaneboardError::InvalidInput(message),
        _ => PaneboardError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PaneboardError */
/* -------------------------------------------------------------------------- */

impl IntoPaneboardError for HttpError {
    fn into_paneboard(self) -> PaneboardError {
        if self.is_timeout() {
            return PaneboardError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PaneboardError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, "");
        }

        if self.is_decode() {
            return PaneboardError::Internal(format!("failed to decode HTTP response: {self}"));
        }

        PaneboardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_paneboard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
