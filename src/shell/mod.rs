// Composition root for the timesheets service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the entry store and wire it into the use case handlers.
// - Expose the HTTP router and map application errors to responses.

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod responses;
pub mod state;
