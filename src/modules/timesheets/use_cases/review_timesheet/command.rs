// Command data type for an admin's review decision.
//
// Purpose
// - Express the intent to approve or reject an entry.
//
// Responsibilities
// - Carry the decision, the reviewing caller and an optional rejection reason.
// - Be independent of transport layer details.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::entry::{EntryId, ReviewDecision};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTimesheet {
    pub entry_id: EntryId,
    pub caller: Caller,
    pub decision: ReviewDecision,
    pub reason: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}
