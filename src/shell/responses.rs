use serde::Serialize;

use crate::modules::timesheets::core::entry::TimesheetEntry;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub message: &'static str,
    pub data: TimesheetEntry,
}
