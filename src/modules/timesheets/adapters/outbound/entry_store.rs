// Port for timesheet persistence.
//
// Purpose
// - Describe what the use case handlers need from storage without tying them to a backend.
//
// Responsibilities
// - Enforce one entry per (user, project, date) on every write. Implementations must
//   report a clash as EntryStoreError::Duplicate, even when two writers race.
// - Apply visibility before filters when listing and tallying.
//
// Testing guidance
// - Use the in memory implementation for handler tests and local development.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::timesheets::core::access::Visibility;
use crate::modules::timesheets::core::entry::{EntryId, TimesheetEntry};
use crate::modules::timesheets::core::filters::EntryFilters;
use crate::modules::timesheets::core::stats::EntryTally;

#[derive(Debug, Error)]
pub enum EntryStoreError {
    #[error("an entry for {user_id} on {project} at {date} already exists")]
    Duplicate {
        user_id: String,
        project: String,
        date: NaiveDate,
    },

    #[error("entry {0} not found")]
    NotFound(EntryId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn insert(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError>;

    async fn find(&self, id: EntryId) -> Result<Option<TimesheetEntry>, EntryStoreError>;

    /// Id of another entry logged by `user_id` for `project` on `date`, if any.
    async fn find_duplicate(
        &self,
        user_id: &str,
        project: &str,
        date: NaiveDate,
        excluding: Option<EntryId>,
    ) -> Result<Option<EntryId>, EntryStoreError>;

    async fn list(
        &self,
        visibility: &Visibility,
        filters: &EntryFilters,
    ) -> Result<Vec<TimesheetEntry>, EntryStoreError>;

    /// Overwrites an existing entry. Fails with NotFound when the entry is gone.
    async fn save(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError>;

    /// Returns false when there was nothing to delete.
    async fn delete(&self, id: EntryId) -> Result<bool, EntryStoreError>;

    async fn tally(&self, visibility: &Visibility) -> Result<EntryTally, EntryStoreError>;
}
