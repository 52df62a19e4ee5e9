// Command data type for revising a timesheet entry.
//
// Purpose
// - Express the intent to replace the editable fields of an existing entry.
//
// Responsibilities
// - Carry the target entry, the acting caller and the raw replacement input.
// - An unreadable body travels as its errors, reported only once the caller may edit.
// - Be independent of transport layer details.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::entry::EntryId;
use crate::modules::timesheets::core::validation::{EntryInput, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimesheet {
    pub entry_id: EntryId,
    pub caller: Caller,
    pub input: Result<EntryInput, ValidationErrors>,
    pub updated_at: DateTime<Utc>,
}
