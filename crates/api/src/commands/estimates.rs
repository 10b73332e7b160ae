//! Estimate CRUD

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use paneboard_domain::{Estimate, EstimatePatch, NewEstimate};

use super::ApiJson;
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::command_helpers::execute_logged;

/// `GET /api/estimates`, newest first
pub async fn list_estimates(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Estimate>>> {
    let estimates = execute_logged("estimates::list", || ctx.records.list_estimates()).await?;
    Ok(Json(estimates))
}

/// `POST /api/estimates`
pub async fn create_estimate(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(estimate): ApiJson<NewEstimate>,
) -> ApiResult<(StatusCode, Json<Estimate>)> {
    let created =
        execute_logged("estimates::create", || ctx.records.create_estimate(estimate)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/estimates/{id}`
pub async fn get_estimate(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Estimate>> {
    let estimate = execute_logged("estimates::get", || ctx.records.get_estimate(&id)).await?;
    Ok(Json(estimate))
}

/// `PATCH /api/estimates/{id}`
pub async fn update_estimate(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<EstimatePatch>,
) -> ApiResult<Json<Estimate>> {
    let estimate =
        execute_logged("estimates::update", || ctx.records.update_estimate(&id, patch)).await?;
    Ok(Json(estimate))
}
