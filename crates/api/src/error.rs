//! JSON error responses for handler failures

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use paneboard_domain::PaneboardError;
use serde_json::json;
use tracing::{error, warn};

use crate::utils::logging::error_label;

/// A domain error on its way out as `{ "error": message }`
#[derive(Debug)]
pub struct ApiError(pub PaneboardError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(PaneboardError::InvalidInput(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PaneboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PaneboardError::NotFound(_) => StatusCode::NOT_FOUND,
            PaneboardError::Auth(_) => StatusCode::UNAUTHORIZED,
            PaneboardError::ExtractionUnavailable(_) | PaneboardError::Network(_) => {
                StatusCode::BAD_GATEWAY
            }
            PaneboardError::Database(_)
            | PaneboardError::Config(_)
            | PaneboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text: the message carried by the variant.
    pub fn message(&self) -> &str {
        match &self.0 {
            PaneboardError::Database(msg)
            | PaneboardError::Config(msg)
            | PaneboardError::Network(msg)
            | PaneboardError::Auth(msg)
            | PaneboardError::NotFound(msg)
            | PaneboardError::InvalidInput(msg)
            | PaneboardError::ExtractionUnavailable(msg)
            | PaneboardError::Internal(msg) => msg,
        }
    }
}

impl From<PaneboardError> for ApiError {
    fn from(err: PaneboardError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = error_label(&self.0);
        if status.is_server_error() {
            error!(kind, status = status.as_u16(), error = %self.0, "request failed");
        } else {
            warn!(kind, status = status.as_u16(), error = %self.0, "request rejected");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
