// Caller extraction for authenticated routes.
//
// Authentication happens upstream. The gateway forwards the authenticated identity in
// two headers, and every timesheet route refuses requests that lack them.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::{Caller, Role};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, USER_ID_HEADER).ok_or(ApplicationError::Unauthenticated)?;
        let role = header(parts, USER_ROLE_HEADER)
            .and_then(|value| value.parse::<Role>().ok())
            .ok_or(ApplicationError::Unauthenticated)?;
        Ok(Caller::new(user_id, role))
    }
}
