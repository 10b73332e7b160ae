//! Inbox and extraction routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use paneboard_domain::{
    ExtractionRequest, IngestEmailRequest, JobRequest, LlmExtractionView, ParsedEmail, RawEmail,
};
use serde::{Deserialize, Serialize};

use super::ApiJson;
use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::utils::command_helpers::execute_logged;

#[derive(Debug, Serialize)]
pub struct EmailsResponse<T> {
    pub emails: Vec<T>,
}

/// Inbox row shown before a message is parsed
#[derive(Debug, Serialize)]
pub struct EmailSummary {
    pub id: String,
    pub subject: String,
    pub from: String,
    pub date: Option<DateTime<Utc>>,
    pub snippet: String,
}

impl From<RawEmail> for EmailSummary {
    fn from(email: RawEmail) -> Self {
        Self {
            id: email.id,
            subject: email.subject,
            from: email.sender,
            date: email.received_at,
            snippet: email.snippet.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub success: bool,
    pub job_request: JobRequest,
    pub analysis: LlmExtractionView,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseByIdRequest {
    #[serde(default)]
    pub email_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseByIdResponse {
    pub parse_result: ParsedEmail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseContentRequest {
    #[serde(default)]
    pub email_content: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseContentResponse {
    pub data: LlmExtractionView,
    pub confidence: f32,
}

/// `GET /api/emails`
pub async fn list_emails(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<EmailsResponse<RawEmail>>> {
    let emails = execute_logged("emails::list", || ctx.inbox.list_unread(None)).await?;
    Ok(Json(EmailsResponse { emails }))
}

/// `POST /api/emails/parse`
pub async fn ingest_email(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<IngestEmailRequest>,
) -> ApiResult<Json<IngestResponse>> {
    let outcome = execute_logged("emails::ingest", || ctx.inbox.ingest(request)).await?;

    Ok(Json(IngestResponse {
        success: true,
        analysis: outcome.extraction.llm_view(),
        job_request: outcome.job_request,
    }))
}

/// `GET /api/email-parsing`
pub async fn list_email_summaries(
    State(ctx): State<Arc<AppContext>>,
) -> ApiResult<Json<EmailsResponse<EmailSummary>>> {
    let emails = execute_logged("email_parsing::list", || ctx.inbox.list_unread(None)).await?;
    Ok(Json(EmailsResponse { emails: emails.into_iter().map(EmailSummary::from).collect() }))
}

/// `POST /api/email-parsing`
pub async fn parse_email_by_id(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<ParseByIdRequest>,
) -> ApiResult<Json<ParseByIdResponse>> {
    let id = request.email_id.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("Email ID is required"));
    }

    let parse_result =
        execute_logged("email_parsing::parse", || ctx.inbox.parse_message(id)).await?;
    Ok(Json(ParseByIdResponse { parse_result }))
}

/// `POST /api/parse-email`
pub async fn parse_email_content(
    State(ctx): State<Arc<AppContext>>,
    ApiJson(request): ApiJson<ParseContentRequest>,
) -> ApiResult<Json<ParseContentResponse>> {
    if request.email_content.trim().is_empty() {
        return Err(ApiError::bad_request("Email content is required"));
    }

    let mut input = ExtractionRequest::new(request.email_content);
    if request.subject.is_some() || request.from.is_some() {
        input = input
            .with_headers(request.subject.unwrap_or_default(), request.from.unwrap_or_default());
    }

    let extraction =
        execute_logged("parse_email::extract", || ctx.inbox.extractor().extract(&input)).await?;
    Ok(Json(ParseContentResponse { confidence: extraction.confidence, data: extraction.llm_view() }))
}
