// Submission handler orchestrates the create flow.
//
// Responsibilities
// - Validate the input against the submission day.
// - Refuse a second entry for the same user, project and day.
// - Insert the new entry as Pending.

use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::entry::TimesheetEntry;
use crate::modules::timesheets::use_cases::submit_timesheet::command::SubmitTimesheet;

pub struct SubmitTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitTimesheet) -> Result<TimesheetEntry, ApplicationError> {
        let fields = command.input.validate(command.submitted_at.date_naive())?;

        if let Some(existing) = self
            .store
            .find_duplicate(&command.user_id, &fields.project, fields.date, None)
            .await?
        {
            warn!(user_id = %command.user_id, existing_id = %existing, "duplicate timesheet submission");
            return Err(ApplicationError::Conflict);
        }

        let entry = TimesheetEntry::submit(command.entry_id, command.user_id, fields, command.submitted_at);
        self.store.insert(&entry).await?;
        info!(entry_id = %entry.id, user_id = %entry.user_id, "timesheet submitted");
        Ok(entry)
    }
}
