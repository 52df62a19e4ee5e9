use axum::{
    Json, Router,
    routing::{get, patch, put},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::modules::timesheets::use_cases::delete_timesheet::inbound::http as delete_http;
use crate::modules::timesheets::use_cases::list_timesheets::inbound::http as list_http;
use crate::modules::timesheets::use_cases::review_timesheet::inbound::http as review_http;
use crate::modules::timesheets::use_cases::submit_timesheet::inbound::http as submit_http;
use crate::modules::timesheets::use_cases::timesheet_stats::inbound::http as stats_http;
use crate::modules::timesheets::use_cases::update_timesheet::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/timesheets", get(list_http::handle).post(submit_http::handle))
        .route("/timesheets/stats", get(stats_http::handle))
        .route("/timesheets/pending", get(list_http::handle_pending))
        .route("/timesheets/{id}", put(update_http::handle).delete(delete_http::handle))
        .route("/timesheets/{id}/approve", patch(review_http::approve))
        .route("/timesheets/{id}/reject", patch(review_http::reject))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
