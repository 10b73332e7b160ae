//! Google Calendar wire types

use paneboard_domain::{CalendarEventDraft, CalendarEventRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInsert {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
    pub reminders: Reminders,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Serialize)]
pub struct Attendee {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Serialize)]
pub struct ReminderOverride {
    pub method: String,
    pub minutes: u32,
}

impl From<&CalendarEventDraft> for EventInsert {
    fn from(draft: &CalendarEventDraft) -> Self {
        let at = |instant: &chrono::DateTime<chrono::Utc>| EventDateTime {
            date_time: instant.to_rfc3339(),
            time_zone: draft.time_zone.clone(),
        };

        Self {
            summary: draft.summary.clone(),
            location: draft.location.clone(),
            description: draft.description.clone(),
            start: at(&draft.start),
            end: at(&draft.end),
            attendees: draft.attendees.iter().map(|email| Attendee { email: email.clone() }).collect(),
            reminders: Reminders {
                use_default: false,
                overrides: draft
                    .reminders
                    .iter()
                    .map(|r| ReminderOverride { method: r.method.clone(), minutes: r.minutes })
                    .collect(),
            },
        }
    }
}

/// Fields of the created event we keep
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedEvent {
    pub id: String,
    #[serde(default)]
    pub html_link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<InsertedEvent> for CalendarEventRef {
    fn from(event: InsertedEvent) -> Self {
        Self { id: event.id, html_link: event.html_link, status: event.status }
    }
}
