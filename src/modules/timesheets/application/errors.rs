use thiserror::Error;

use crate::modules::timesheets::adapters::outbound::entry_store::EntryStoreError;
use crate::modules::timesheets::core::validation::ValidationErrors;

pub const DUPLICATE_ENTRY_MESSAGE: &str = "This project is already logged for today.";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{}", DUPLICATE_ENTRY_MESSAGE)]
    Conflict,

    #[error("{0}")]
    Forbidden(String),

    #[error("Timesheet not found.")]
    NotFound,

    #[error("Unauthenticated.")]
    Unauthenticated,

    #[error(transparent)]
    Store(EntryStoreError),
}

impl From<EntryStoreError> for ApplicationError {
    fn from(error: EntryStoreError) -> Self {
        match error {
            EntryStoreError::Duplicate { .. } => ApplicationError::Conflict,
            EntryStoreError::NotFound(_) => ApplicationError::NotFound,
            other => ApplicationError::Store(other),
        }
    }
}
