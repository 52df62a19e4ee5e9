// Delete handler removes an entry on behalf of its owner or an admin.

use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Caller, Operation, authorize};
use crate::modules::timesheets::core::entry::EntryId;
use crate::modules::timesheets::use_cases::update_timesheet::handler::NOT_OWNER_MESSAGE;

pub struct DeleteTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, caller: &Caller, entry_id: EntryId) -> Result<(), ApplicationError> {
        let entry = self
            .store
            .find(entry_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        if authorize(caller, Operation::Modify { owner_id: &entry.user_id }).is_denied() {
            warn!(%entry_id, user_id = %caller.user_id, "delete refused");
            return Err(ApplicationError::Forbidden(NOT_OWNER_MESSAGE.into()));
        }

        // A concurrent delete may have won since the lookup.
        if !self.store.delete(entry_id).await? {
            return Err(ApplicationError::NotFound);
        }
        info!(%entry_id, user_id = %caller.user_id, "timesheet deleted");
        Ok(())
    }
}
