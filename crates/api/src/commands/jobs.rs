//! Crew board and scheduling routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use paneboard_domain::{
    CalendarEventRef, Job, ScheduleJobRequest, ScheduledJob, StatusUpdateRequest,
};
use serde::Serialize;

use super::ApiJson;
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::command_helpers::execute_logged;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub success: bool,
    pub scheduled_job: ScheduledJob,
    pub calendar_event: CalendarEventRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub updated_job: ScheduledJob,
}

/// `GET /api/jobs`
pub async fn list_jobs(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Job>>> {
    let jobs = execute_logged("jobs::list", || ctx.records.list_jobs()).await?;
    Ok(Json(jobs))
}

/// `POST /api/jobs`
pub async fn create_job(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(job): ApiJson<Job>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    let job = execute_logged("jobs::create", || ctx.records.create_job(job)).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// `POST /api/jobs/schedule`
pub async fn schedule_job(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<ScheduleJobRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let outcome = execute_logged("jobs::schedule", || ctx.scheduling.schedule(request)).await?;

    Ok(Json(ScheduleResponse {
        success: true,
        scheduled_job: outcome.scheduled_job,
        calendar_event: outcome.calendar_event,
    }))
}

/// `PATCH /api/jobs/status`
pub async fn update_job_status(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<StatusUpdateRequest>,
) -> ApiResult<Json<StatusUpdateResponse>> {
    let updated_job =
        execute_logged("jobs::update_status", || ctx.scheduling.update_status(request)).await?;
    Ok(Json(StatusUpdateResponse { success: true, updated_job }))
}
