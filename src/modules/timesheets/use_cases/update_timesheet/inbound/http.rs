use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::validation::EntryInput;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::shell::errors::body_errors;
use crate::shell::responses::EntryResponse;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<EntryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(entry_id) = id.map_err(|_| ApplicationError::NotFound)?;
    let command = UpdateTimesheet {
        entry_id,
        caller,
        input: body.map(|Json(input)| input).map_err(body_errors),
        updated_at: Utc::now(),
    };
    let entry = state.update_handler.handle(command).await?;

    Ok(Json(EntryResponse {
        message: "Timesheet updated successfully.",
        data: entry,
    }))
}
