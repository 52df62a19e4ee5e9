// Review handler records an admin's approval or rejection.
//
// Responsibilities
// - Refuse non-admins before looking the entry up.
// - Stamp the reviewer and review time; keep a reason only on rejection.
//
// Any current status may be reviewed again, the last decision wins.

use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Operation, authorize};
use crate::modules::timesheets::core::entry::TimesheetEntry;
use crate::modules::timesheets::use_cases::review_timesheet::command::ReviewTimesheet;

pub struct ReviewTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ReviewTimesheetHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: ReviewTimesheet) -> Result<TimesheetEntry, ApplicationError> {
        let verb = command.decision.verb();
        if authorize(&command.caller, Operation::Review).is_denied() {
            warn!(entry_id = %command.entry_id, user_id = %command.caller.user_id, verb, "review refused");
            return Err(ApplicationError::Forbidden(format!(
                "Unauthorized. Only admin can {verb}."
            )));
        }

        let entry = self
            .store
            .find(command.entry_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        let reviewed = entry.review(
            command.decision,
            command.caller.user_id,
            command.reason.filter(|reason| !reason.trim().is_empty()),
            command.reviewed_at,
        );
        self.store.save(&reviewed).await?;
        info!(entry_id = %reviewed.id, status = %reviewed.status, "timesheet reviewed");
        Ok(reviewed)
    }
}
