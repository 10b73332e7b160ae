use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use paneboard_core::{CustomerNotifier, MailProvider};
use paneboard_domain::constants::{NO_SUBJECT, UNKNOWN_SENDER};
use paneboard_domain::types::email::parse_date_header;
use paneboard_domain::{CustomerMessage, GmailConfig, RawEmail, Result};
use reqwest::Method;
use tracing::{debug, info, instrument};
use url::Url;

use super::mime::{encode_html_message, extract_text, header};
use super::types::{GmailMessage, MessageList, SendRequest, SendResponse};
use crate::http::{endpoint, HttpClient};
use crate::integrations::google_auth::GoogleTokenSource;

/// Gmail v1 REST client for the authenticated user (`users/me`)
pub struct GmailClient {
    http: HttpClient,
    tokens: Arc<GoogleTokenSource>,
    api_base: String,
    query: String,
    sender_address: Option<String>,
}

impl GmailClient {
    pub fn new(http: HttpClient, tokens: Arc<GoogleTokenSource>, config: &GmailConfig) -> Self {
        Self {
            http,
            tokens,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            query: config.query.clone(),
            sender_address: config.sender_address.clone(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        endpoint(&self.api_base, ["users", "me"].iter().chain(segments))
    }
}

#[async_trait]
impl MailProvider for GmailClient {
    #[instrument(skip(self))]
    async fn list_unread_ids(&self, max_results: u32) -> Result<Vec<String>> {
        let token = self.tokens.access_token().await?;
        let url = self.endpoint(&["messages"])?;
        let request = self
            .http
            .request(Method::GET, url)
            .bearer_auth(token)
            .query(&[("q", self.query.as_str()), ("maxResults", &max_results.to_string())]);

        let list: MessageList = self.http.send_json(request).await?;
        debug!(count = list.messages.len(), more = list.next_page_token.is_some(), "Listed messages");

        Ok(list.messages.into_iter().take(max_results as usize).map(|m| m.id).collect())
    }

    #[instrument(skip(self))]
    async fn get_message(&self, id: &str) -> Result<RawEmail> {
        let token = self.tokens.access_token().await?;
        let url = self.endpoint(&["messages", id])?;
        let request =
            self.http.request(Method::GET, url).bearer_auth(token).query(&[("format", "full")]);

        let message: GmailMessage = self.http.send_json(request).await?;
        Ok(to_raw_email(message))
    }
}

#[async_trait]
impl CustomerNotifier for GmailClient {
    async fn send(&self, message: &CustomerMessage) -> Result<()> {
        let token = self.tokens.access_token().await?;
        let url = self.endpoint(&["messages", "send"])?;
        let raw = encode_html_message(
            self.sender_address.as_deref(),
            &message.to,
            &message.subject,
            &message.html_body,
        );

        let request = self.http.request(Method::POST, url).bearer_auth(token).json(&SendRequest { raw });
        let sent: SendResponse = self.http.send_json(request).await?;

        info!(message_id = %sent.id, "Customer email sent");
        Ok(())
    }
}

/// Map a `format=full` message onto the domain email.
pub fn to_raw_email(message: GmailMessage) -> RawEmail {
    let payload = message.payload.unwrap_or_default();
    let subject = header(&payload, "Subject").unwrap_or(NO_SUBJECT).to_string();
    let sender = header(&payload, "From").unwrap_or(UNKNOWN_SENDER).to_string();
    let received_at = header(&payload, "Date")
        .and_then(parse_date_header)
        .or_else(|| internal_date(message.internal_date.as_deref()));

    RawEmail {
        id: message.id,
        thread_id: message.thread_id,
        subject,
        sender,
        received_at,
        body_text: extract_text(&payload),
        snippet: message.snippet,
    }
}

fn internal_date(millis: Option<&str>) -> Option<DateTime<Utc>> {
    let millis = millis?.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis)
}
