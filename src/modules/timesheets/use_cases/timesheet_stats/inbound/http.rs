use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApplicationError> {
    let stats = state.stats_handler.handle(&caller).await?;
    Ok(Json(stats))
}
