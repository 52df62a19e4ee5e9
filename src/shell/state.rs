use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::use_cases::delete_timesheet::handler::DeleteTimesheetHandler;
use crate::modules::timesheets::use_cases::list_timesheets::handler::ListTimesheetsHandler;
use crate::modules::timesheets::use_cases::review_timesheet::handler::ReviewTimesheetHandler;
use crate::modules::timesheets::use_cases::submit_timesheet::handler::SubmitTimesheetHandler;
use crate::modules::timesheets::use_cases::timesheet_stats::handler::TimesheetStatsHandler;
use crate::modules::timesheets::use_cases::update_timesheet::handler::UpdateTimesheetHandler;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitTimesheetHandler<dyn EntryStore>>,
    pub list_handler: Arc<ListTimesheetsHandler<dyn EntryStore>>,
    pub update_handler: Arc<UpdateTimesheetHandler<dyn EntryStore>>,
    pub delete_handler: Arc<DeleteTimesheetHandler<dyn EntryStore>>,
    pub review_handler: Arc<ReviewTimesheetHandler<dyn EntryStore>>,
    pub stats_handler: Arc<TimesheetStatsHandler<dyn EntryStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            submit_handler: Arc::new(SubmitTimesheetHandler::new(store.clone())),
            list_handler: Arc::new(ListTimesheetsHandler::new(store.clone())),
            update_handler: Arc::new(UpdateTimesheetHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteTimesheetHandler::new(store.clone())),
            review_handler: Arc::new(ReviewTimesheetHandler::new(store.clone())),
            stats_handler: Arc::new(TimesheetStatsHandler::new(store)),
        }
    }
}
