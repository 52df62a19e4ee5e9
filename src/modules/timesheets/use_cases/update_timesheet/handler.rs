// Update handler orchestrates the revise flow.
//
// Responsibilities
// - Resolve the entry, then check the caller may modify it.
// - Validate the replacement fields and refuse a clash with another entry of the owner.
// - Send the revised entry back to Pending review.

use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Operation, authorize};
use crate::modules::timesheets::core::entry::TimesheetEntry;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;

pub const NOT_OWNER_MESSAGE: &str = "Unauthorized";

pub struct UpdateTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateTimesheet) -> Result<TimesheetEntry, ApplicationError> {
        let entry = self
            .store
            .find(command.entry_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        let access = authorize(&command.caller, Operation::Modify { owner_id: &entry.user_id });
        if access.is_denied() {
            warn!(entry_id = %entry.id, user_id = %command.caller.user_id, "update refused");
            return Err(ApplicationError::Forbidden(NOT_OWNER_MESSAGE.into()));
        }

        let fields = command.input?.validate(command.updated_at.date_naive())?;

        // The owner's entries are what must stay unique, whoever edits them.
        if let Some(existing) = self
            .store
            .find_duplicate(&entry.user_id, &fields.project, fields.date, Some(entry.id))
            .await?
        {
            warn!(entry_id = %entry.id, existing_id = %existing, "update would duplicate an entry");
            return Err(ApplicationError::Conflict);
        }

        let revised = entry.revise(fields, command.updated_at);
        self.store.save(&revised).await?;
        info!(entry_id = %revised.id, user_id = %command.caller.user_id, "timesheet updated");
        Ok(revised)
    }
}
