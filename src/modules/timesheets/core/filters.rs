// Narrowing filters applied to a caller's visible entries.
//
// - status: exact match on the status name.
// - project: case-insensitive substring.
// - date range: inclusive, only applied when both bounds are given.

use chrono::NaiveDate;

use crate::modules::timesheets::core::entry::TimesheetEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilters {
    pub status: Option<String>,
    pub project: Option<String>,
    pub date_range: Option<DateRange>,
}

impl EntryFilters {
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// A half open range is ignored rather than rejected.
    pub fn dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_range = match (from, to) {
            (Some(from), Some(to)) => Some(DateRange { from, to }),
            _ => None,
        };
        self
    }

    pub fn matches(&self, entry: &TimesheetEntry) -> bool {
        if let Some(status) = &self.status {
            if entry.status.as_str() != status {
                return false;
            }
        }
        if let Some(project) = &self.project {
            if !entry.project.to_lowercase().contains(&project.to_lowercase()) {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.contains(entry.date) {
                return false;
            }
        }
        true
    }
}
