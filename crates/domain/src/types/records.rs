//! Dashboard records: estimates, board jobs, teams, notifications, and the
//! manual override log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{PaneboardError, Result};
use crate::impl_domain_status_conversions;

/// Row in `estimates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub details: String,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default = "pending_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Estimate as submitted from the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEstimate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: String,
}

impl NewEstimate {
    pub fn validate(&self) -> Result<()> {
        if [&self.name, &self.address, &self.amount].iter().any(|v| v.trim().is_empty()) {
            return Err(PaneboardError::InvalidInput(
                "Name, address, and amount are required fields".to_string(),
            ));
        }
        Ok(())
    }

    /// Row to insert; new estimates always start as `pending`.
    pub fn into_estimate(self) -> Estimate {
        Estimate {
            id: None,
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            details: self.details,
            amount: self.amount.trim().to_string(),
            status: pending_status(),
            created_at: None,
        }
    }
}

/// Partial update for an estimate; only present fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string_or_number")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EstimatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.details.is_none()
            && self.amount.is_none()
            && self.status.is_none()
    }
}

/// Status of a crew job on the team board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobBoardStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl_domain_status_conversions!(JobBoardStatus {
    Scheduled => "scheduled",
    InProgress => "in-progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Row in `jobs`: a job assigned to a crew
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub team_id: String,
    pub job_name: String,
    pub date: String,
    #[serde(default)]
    pub status: JobBoardStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Row in `notifications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn unread(message: impl Into<String>) -> Self {
        Self { id: None, message: message.into(), read: false, created_at: None }
    }
}

/// Manual interventions staff can trigger from the override panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideKind {
    JobReassign,
    EstimateAdjust,
    ScheduleChange,
    CancelJob,
}

impl_domain_status_conversions!(OverrideKind {
    JobReassign => "job-reassign",
    EstimateAdjust => "estimate-adjust",
    ScheduleChange => "schedule-change",
    CancelJob => "cancel-job",
});

impl OverrideKind {
    pub const ALL: [Self; 4] =
        [Self::JobReassign, Self::EstimateAdjust, Self::ScheduleChange, Self::CancelJob];

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobReassign => "Reassign Job to Different Team",
            Self::EstimateAdjust => "Adjust Estimate Amount",
            Self::ScheduleChange => "Change Job Schedule",
            Self::CancelJob => "Cancel Scheduled Job",
        }
    }
}

/// Row in `override_actions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub action: OverrideKind,
    pub label: String,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Override trigger from the dashboard; `action` is the kebab-case id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOverride {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

fn pending_status() -> String {
    "pending".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }
    }
}

// Amounts arrive as text from the form but as numbers from scripts.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_estimate_requires_name_address_amount() {
        let estimate = NewEstimate {
            name: "Jane".into(),
            address: "  ".into(),
            details: String::new(),
            amount: "120".into(),
        };

        let err = estimate.validate().unwrap_err();
        assert_eq!(
            err,
            PaneboardError::InvalidInput("Name, address, and amount are required fields".into())
        );
    }

    #[test]
    fn numeric_amount_is_accepted() {
        let estimate: NewEstimate =
            serde_json::from_str(r#"{"name":"Jane","address":"1 Elm St","amount":249.5}"#).unwrap();

        assert_eq!(estimate.amount, "249.5");
        assert!(estimate.validate().is_ok());
        assert_eq!(estimate.into_estimate().status, "pending");
    }

    #[test]
    fn board_status_is_kebab_case() {
        let job: Job = serde_json::from_str(
            r#"{"team_id":"1","job_name":"Smith residence","date":"2025-05-01","status":"in-progress"}"#,
        )
        .unwrap();

        assert_eq!(job.status, JobBoardStatus::InProgress);
        assert_eq!(JobBoardStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn override_kinds_carry_labels() {
        let kind: OverrideKind = "cancel-job".parse().unwrap();
        assert_eq!(kind.label(), "Cancel Scheduled Job");
        assert_eq!(OverrideKind::ALL.len(), 4);
        assert!("delete-everything".parse::<OverrideKind>().is_err());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = EstimatePatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}
