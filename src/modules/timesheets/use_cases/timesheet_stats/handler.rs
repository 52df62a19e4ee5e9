// Statistics handler summarises the entries a caller can see.

use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Caller, Visibility};
use crate::modules::timesheets::core::stats::TimesheetStats;

pub struct TimesheetStatsHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> TimesheetStatsHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, caller: &Caller) -> Result<TimesheetStats, ApplicationError> {
        let tally = self.store.tally(&Visibility::for_caller(caller)).await?;
        Ok(TimesheetStats::from(tally))
    }
}
