//! Recording calendar and notifier fakes

use std::sync::Mutex;

use async_trait::async_trait;
use paneboard_core::{CalendarProvider, CustomerNotifier};
use paneboard_domain::{
    CalendarEventDraft, CalendarEventRef, CustomerMessage, PaneboardError, Result as DomainResult,
};

#[derive(Default)]
pub struct RecordingCalendar {
    pub drafts: Mutex<Vec<CalendarEventDraft>>,
}

#[async_trait]
impl CalendarProvider for RecordingCalendar {
    async fn create_event(&self, draft: &CalendarEventDraft) -> DomainResult<CalendarEventRef> {
        let mut drafts = self.drafts.lock().unwrap();
        drafts.push(draft.clone());
        Ok(CalendarEventRef {
            id: format!("evt-{}", drafts.len()),
            html_link: None,
            status: Some("confirmed".into()),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<CustomerMessage>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

#[async_trait]
impl CustomerNotifier for RecordingNotifier {
    async fn send(&self, message: &CustomerMessage) -> DomainResult<()> {
        if self.fail {
            return Err(PaneboardError::Network("smtp relay unavailable".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
