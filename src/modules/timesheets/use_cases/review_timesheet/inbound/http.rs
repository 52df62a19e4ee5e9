use axum::{
    Json,
    body::Bytes,
    extract::rejection::PathRejection,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::entry::ReviewDecision;
use crate::modules::timesheets::use_cases::review_timesheet::command::ReviewTimesheet;
use crate::shell::responses::EntryResponse;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectTimesheetBody {
    pub reason: Option<String>,
}

/// The reject body is optional; an empty or unreadable body means no reason.
fn rejection_reason(body: &Bytes) -> Option<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<RejectTimesheetBody>(body) {
        Ok(parsed) => parsed.reason,
        Err(error) => {
            debug!(%error, "ignoring unreadable reject body");
            None
        }
    }
}

async fn review(
    state: AppState,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
    decision: ReviewDecision,
    reason: Option<String>,
) -> Result<Json<EntryResponse>, ApplicationError> {
    let Path(entry_id) = id.map_err(|_| ApplicationError::NotFound)?;
    let command = ReviewTimesheet {
        entry_id,
        caller,
        decision,
        reason,
        reviewed_at: Utc::now(),
    };
    let entry = state.review_handler.handle(command).await?;
    let message = match decision {
        ReviewDecision::Approve => "Timesheet approved successfully.",
        ReviewDecision::Reject => "Timesheet rejected.",
    };
    Ok(Json(EntryResponse { message, data: entry }))
}

pub async fn approve(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    review(state, caller, id, ReviewDecision::Approve, None).await
}

pub async fn reject(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApplicationError> {
    review(state, caller, id, ReviewDecision::Reject, rejection_reason(&body)).await
}
