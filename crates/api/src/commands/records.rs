//! Teams, notification feed, and manual overrides

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use paneboard_domain::{NewOverride, Notification, OverrideAction, Team};
use serde::Deserialize;

use super::ApiJson;
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::command_helpers::execute_logged;

#[derive(Debug, Default, Deserialize)]
pub struct NewNotification {
    #[serde(default)]
    pub message: String,
}

/// `GET /api/teams`
pub async fn list_teams(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Team>>> {
    let teams = execute_logged("teams::list", || ctx.records.list_teams()).await?;
    Ok(Json(teams))
}

/// `GET /api/notifications`
pub async fn list_notifications(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<Vec<Notification>>> {
    let notifications =
        execute_logged("notifications::list", || ctx.records.list_notifications()).await?;
    Ok(Json(notifications))
}

/// `POST /api/notifications`
pub async fn create_notification(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(body): ApiJson<NewNotification>,
) -> ApiResult<(StatusCode, Json<Notification>)> {
    let notification = execute_logged("notifications::create", || {
        ctx.records.create_notification(&body.message)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// `GET /api/overrides`
pub async fn list_overrides(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<Vec<OverrideAction>>> {
    let overrides = execute_logged("overrides::list", || ctx.records.list_overrides()).await?;
    Ok(Json(overrides))
}

/// `POST /api/overrides`
pub async fn record_override(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<NewOverride>,
) -> ApiResult<(StatusCode, Json<OverrideAction>)> {
    let action = execute_logged("overrides::record", || ctx.records.record_override(request)).await?;
    Ok((StatusCode::CREATED, Json(action)))
}
