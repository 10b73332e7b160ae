//! Scripted mail provider

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use paneboard_core::MailProvider;
use paneboard_domain::{PaneboardError, RawEmail, Result as DomainResult};

/// Serves a fixed mailbox. The first `transient_failures` calls of each kind
/// fail with a network error.
#[derive(Default)]
pub struct FakeMailbox {
    messages: Vec<RawEmail>,
    transient_failures: u32,
    pub list_calls: AtomicU32,
    pub get_calls: AtomicU32,
}

impl FakeMailbox {
    pub fn new(messages: Vec<RawEmail>) -> Self {
        Self { messages, ..Self::default() }
    }

    pub fn failing_first(mut self, failures: u32) -> Self {
        self.transient_failures = failures;
        self
    }
}

#[async_trait]
impl MailProvider for FakeMailbox {
    async fn list_unread_ids(&self, max_results: u32) -> DomainResult<Vec<String>> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
        if call < self.transient_failures {
            return Err(PaneboardError::Network("connection reset".into()));
        }
        Ok(self.messages.iter().take(max_results as usize).map(|m| m.id.clone()).collect())
    }

    async fn get_message(&self, id: &str) -> DomainResult<RawEmail> {
        let call = self.get_calls.fetch_add(1, Ordering::SeqCst);
        if call < self.transient_failures {
            return Err(PaneboardError::Network("connection reset".into()));
        }
        self.messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| PaneboardError::NotFound(format!("message {id}")))
    }
}

/// A message received on 2025-05-`day` at 08:00 UTC.
pub fn email(id: &str, day: u32, from: &str, subject: &str, body: &str) -> RawEmail {
    RawEmail {
        id: id.to_string(),
        thread_id: None,
        subject: subject.to_string(),
        sender: from.to_string(),
        received_at: Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).single(),
        body_text: body.to_string(),
        snippet: None,
    }
}
