// Listing handler serves the timesheet overview and the review queue.
//
// Responsibilities
// - Scope the listing to what the caller may see before any filter applies.
// - Offer admins the queue of entries still awaiting review.

use std::sync::Arc;
use tracing::debug;

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Caller, Operation, Visibility, authorize};
use crate::modules::timesheets::core::entry::{EntryStatus, TimesheetEntry};
use crate::modules::timesheets::core::filters::EntryFilters;

pub const ADMIN_ONLY_MESSAGE: &str = "Unauthorized. Admin access required.";

pub struct ListTimesheetsHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ListTimesheetsHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        caller: &Caller,
        filters: &EntryFilters,
    ) -> Result<Vec<TimesheetEntry>, ApplicationError> {
        let visibility = Visibility::for_caller(caller);
        let entries = self.store.list(&visibility, filters).await?;
        debug!(user_id = %caller.user_id, count = entries.len(), "timesheets listed");
        Ok(entries)
    }

    pub async fn pending(&self, caller: &Caller) -> Result<Vec<TimesheetEntry>, ApplicationError> {
        if authorize(caller, Operation::Review).is_denied() {
            return Err(ApplicationError::Forbidden(ADMIN_ONLY_MESSAGE.into()));
        }
        let filters = EntryFilters::default().status(EntryStatus::Pending.as_str());
        Ok(self.store.list(&Visibility::Everyone, &filters).await?)
    }
}
