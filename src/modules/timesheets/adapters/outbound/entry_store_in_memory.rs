// In memory implementation of the EntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep entries in insertion order.
// - Check for duplicates and write under the same lock so racing writers cannot both win.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::timesheets::adapters::outbound::entry_store::{EntryStore, EntryStoreError};
use crate::modules::timesheets::core::access::Visibility;
use crate::modules::timesheets::core::entry::{EntryId, TimesheetEntry};
use crate::modules::timesheets::core::filters::EntryFilters;
use crate::modules::timesheets::core::stats::EntryTally;

#[derive(Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<Vec<TimesheetEntry>>,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EntryStoreError> {
        if self.is_offline {
            return Err(EntryStoreError::Backend("Entry store offline".into()));
        }
        Ok(())
    }
}

fn clashes_with(rows: &[TimesheetEntry], entry: &TimesheetEntry) -> Option<EntryStoreError> {
    rows.iter()
        .any(|row| row.id != entry.id && row.is_same_day_and_project(&entry.user_id, &entry.project, entry.date))
        .then(|| EntryStoreError::Duplicate {
            user_id: entry.user_id.clone(),
            project: entry.project.clone(),
            date: entry.date,
        })
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        if let Some(error) = clashes_with(&rows, entry) {
            return Err(error);
        }
        rows.push(entry.clone());
        Ok(())
    }

    async fn find(&self, id: EntryId) -> Result<Option<TimesheetEntry>, EntryStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }

    async fn find_duplicate(
        &self,
        user_id: &str,
        project: &str,
        date: NaiveDate,
        excluding: Option<EntryId>,
    ) -> Result<Option<EntryId>, EntryStoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| Some(row.id) != excluding)
            .find(|row| row.is_same_day_and_project(user_id, project, date))
            .map(|row| row.id))
    }

    async fn list(
        &self,
        visibility: &Visibility,
        filters: &EntryFilters,
    ) -> Result<Vec<TimesheetEntry>, EntryStoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| visibility.includes(row))
            .filter(|row| filters.matches(row))
            .cloned()
            .collect())
    }

    async fn save(&self, entry: &TimesheetEntry) -> Result<(), EntryStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        if let Some(error) = clashes_with(&rows, entry) {
            return Err(error);
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == entry.id)
            .ok_or(EntryStoreError::NotFound(entry.id))?;
        *row = entry.clone();
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> Result<bool, EntryStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() < before)
    }

    async fn tally(&self, visibility: &Visibility) -> Result<EntryTally, EntryStoreError> {
        self.ensure_online()?;
        let rows = self.rows.read().await;
        Ok(EntryTally::from_entries(rows.iter().filter(|row| visibility.includes(row))))
    }
}
