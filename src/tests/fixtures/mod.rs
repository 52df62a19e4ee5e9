// Shared test fixtures. Compiled into the crate only for unit tests.

pub mod callers;
pub mod clock;
pub mod entries;
pub mod http;
pub mod stores;
