use axum::{
    Json,
    extract::rejection::PathRejection,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::shell::responses::MessageResponse;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(entry_id) = id.map_err(|_| ApplicationError::NotFound)?;
    state.delete_handler.handle(&caller, entry_id).await?;
    Ok(Json(MessageResponse {
        message: "Timesheet deleted successfully.",
    }))
}
