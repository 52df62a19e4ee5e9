use std::sync::Arc;

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStore;
use crate::modules::timesheets::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use crate::modules::timesheets::core::entry::TimesheetEntry;

pub async fn store_with(entries: &[TimesheetEntry]) -> Arc<InMemoryEntryStore> {
    let store = InMemoryEntryStore::new();
    for entry in entries {
        store.insert(entry).await.expect("seeding the store failed");
    }
    Arc::new(store)
}

pub fn offline_store() -> Arc<InMemoryEntryStore> {
    let mut store = InMemoryEntryStore::new();
    store.toggle_offline();
    Arc::new(store)
}
