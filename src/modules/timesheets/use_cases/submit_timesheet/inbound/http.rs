use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::validation::EntryInput;
use crate::modules::timesheets::use_cases::submit_timesheet::command::SubmitTimesheet;
use crate::shell::errors::invalid_body;
use crate::shell::responses::EntryResponse;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<EntryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(input) = body.map_err(invalid_body)?;

    let command = SubmitTimesheet {
        entry_id: Uuid::now_v7(),
        user_id: caller.user_id,
        input,
        submitted_at: Utc::now(),
    };
    let entry = state.submit_handler.handle(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "Timesheet submitted successfully.",
            data: entry,
        }),
    ))
}
