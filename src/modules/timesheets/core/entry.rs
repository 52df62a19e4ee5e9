// TimesheetEntry is the plain entity stored for every submitted day of work.
//
// Purpose
// - Hold the entry fields and the approval metadata.
// - Provide the state transitions: submit, revise and review.
//
// Boundaries
// - No input or output. The use case handlers load and save entries explicitly.
//
// Invariants
// - status, approved_by, approved_at and rejection_reason always change together.
// - Revising any field reopens the entry as Pending.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type EntryId = Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "Pending",
            EntryStatus::Approved => "Approved",
            EntryStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown entry status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for EntryStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(EntryStatus::Pending),
            "Approved" => Ok(EntryStatus::Approved),
            "Rejected" => Ok(EntryStatus::Rejected),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn status(&self) -> EntryStatus {
        match self {
            ReviewDecision::Approve => EntryStatus::Approved,
            ReviewDecision::Reject => EntryStatus::Rejected,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }
}

/// Validated, user editable fields of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub project: String,
    pub hours_worked: Decimal,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: EntryId,
    pub user_id: String,
    pub project: String,
    pub hours_worked: Decimal,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub status: EntryStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimesheetEntry {
    pub fn submit(
        id: EntryId,
        user_id: impl Into<String>,
        fields: EntryFields,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            project: fields.project,
            hours_worked: fields.hours_worked,
            date: fields.date,
            notes: fields.notes,
            status: EntryStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            created_at: submitted_at,
            updated_at: submitted_at,
        }
    }

    pub fn revise(self, fields: EntryFields, revised_at: DateTime<Utc>) -> Self {
        Self {
            project: fields.project,
            hours_worked: fields.hours_worked,
            date: fields.date,
            notes: fields.notes,
            status: EntryStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            updated_at: revised_at,
            ..self
        }
    }

    pub fn review(
        self,
        decision: ReviewDecision,
        reviewer_id: impl Into<String>,
        reason: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        let rejection_reason = match decision {
            ReviewDecision::Approve => None,
            ReviewDecision::Reject => reason,
        };
        Self {
            status: decision.status(),
            approved_by: Some(reviewer_id.into()),
            approved_at: Some(reviewed_at),
            rejection_reason,
            updated_at: reviewed_at,
            ..self
        }
    }

    pub fn is_same_day_and_project(&self, user_id: &str, project: &str, date: NaiveDate) -> bool {
        self.user_id == user_id && self.project == project && self.date == date
    }
}
