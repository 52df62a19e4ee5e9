// Command data type for submitting a timesheet entry.
//
// Purpose
// - Express an employee's intent to log hours on a project for one day.
//
// Responsibilities
// - Carry raw input for the handler to validate, plus the owner and the submission time.
// - Be independent of transport layer details.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::entry::EntryId;
use crate::modules::timesheets::core::validation::EntryInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTimesheet {
    pub entry_id: EntryId,
    pub user_id: String,
    pub input: EntryInput,
    pub submitted_at: DateTime<Utc>,
}
