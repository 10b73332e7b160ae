//! Google Calendar provider implementation

use std::sync::Arc;

use async_trait::async_trait;
use paneboard_core::CalendarProvider;
use paneboard_domain::{CalendarConfig, CalendarEventDraft, CalendarEventRef, Result};
use reqwest::Method;
use tracing::info;

use super::types::{EventInsert, InsertedEvent};
use crate::http::{endpoint, HttpClient};
use crate::integrations::google_auth::GoogleTokenSource;

/// Inserts events into one configured calendar
pub struct GoogleCalendarClient {
    http: HttpClient,
    tokens: Arc<GoogleTokenSource>,
    api_base: String,
    calendar_id: String,
}

impl GoogleCalendarClient {
    pub fn new(http: HttpClient, tokens: Arc<GoogleTokenSource>, config: &CalendarConfig) -> Self {
        Self {
            http,
            tokens,
            api_base: config.api_base.clone(),
            calendar_id: config.calendar_id.clone(),
        }
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    async fn create_event(&self, draft: &CalendarEventDraft) -> Result<CalendarEventRef> {
        let token = self.tokens.access_token().await?;
        let url = endpoint(&self.api_base, ["calendars", self.calendar_id.as_str(), "events"])?;

        let request = self
            .http
            .request(Method::POST, url)
            .bearer_auth(token)
            .json(&EventInsert::from(draft));
        let event: InsertedEvent = self.http.send_json(request).await?;

        info!(event_id = %event.id, calendar_id = %self.calendar_id, "Calendar event inserted");
        Ok(event.into())
    }
}
