use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::access::Caller;
use crate::modules::timesheets::core::filters::EntryFilters;
use crate::modules::timesheets::core::validation::{ValidationErrors, parse_date};
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListTimesheetsParams {
    pub status: Option<String>,
    pub project: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ListTimesheetsParams {
    pub fn into_filters(self) -> Result<EntryFilters, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut date = |field: &str, value: Option<String>| {
            let value = present(value)?;
            let parsed = parse_date(value.trim());
            if parsed.is_none() {
                errors.add(field, format!("The {field} field must be a valid date."));
            }
            parsed
        };
        let from = date("date_from", self.date_from);
        let to = date("date_to", self.date_to);
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut filters = EntryFilters::default().dates(from, to);
        if let Some(status) = present(self.status) {
            filters = filters.status(status);
        }
        if let Some(project) = present(self.project) {
            filters = filters.project(project);
        }
        Ok(filters)
    }
}

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<ListTimesheetsParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    let filters = params.into_filters()?;
    let entries = state.list_handler.handle(&caller, &filters).await?;
    Ok(Json(entries))
}

pub async fn handle_pending(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApplicationError> {
    let entries = state.list_handler.pending(&caller).await?;
    Ok(Json(entries))
}
