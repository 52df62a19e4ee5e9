// Aggregate figures over the entries visible to a caller.
//
// EntryTally is what a store can count and sum cheaply; TimesheetStats adds the derived
// average. The average is absent, not zero, when nothing has been logged.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::timesheets::core::entry::{EntryStatus, TimesheetEntry};

pub const AVERAGE_HOURS_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTally {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub total_hours: Decimal,
}

impl EntryTally {
    pub fn record(&mut self, entry: &TimesheetEntry) {
        self.total += 1;
        match entry.status {
            EntryStatus::Approved => self.approved += 1,
            EntryStatus::Pending => self.pending += 1,
            EntryStatus::Rejected => self.rejected += 1,
        }
        self.total_hours += entry.hours_worked;
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TimesheetEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut tally, entry| {
            tally.record(entry);
            tally
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub total_hours: Decimal,
    pub average_hours: Option<Decimal>,
}

impl From<EntryTally> for TimesheetStats {
    fn from(tally: EntryTally) -> Self {
        let average_hours = (tally.total > 0)
            .then(|| (tally.total_hours / Decimal::from(tally.total)).round_dp(AVERAGE_HOURS_DECIMALS));
        Self {
            total: tally.total,
            approved: tally.approved,
            pending: tally.pending,
            rejected: tally.rejected,
            total_hours: tally.total_hours,
            average_hours,
        }
    }
}
