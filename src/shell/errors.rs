// HTTP mapping for application errors.
//
// - 422 carries `{"errors": {field: [message]}}`, every other error `{"error": message}`.
// - Store failures are logged and reported without backend detail.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::modules::timesheets::application::errors::ApplicationError;
use crate::modules::timesheets::core::validation::ValidationErrors;

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Conflict => StatusCode::CONFLICT,
            ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApplicationError::NotFound => StatusCode::NOT_FOUND,
            ApplicationError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApplicationError::Validation(errors) => (status, Json(json!({ "errors": errors }))).into_response(),
            ApplicationError::Store(error) => {
                tracing::error!(%error, "entry store failure");
                (status, Json(json!({ "error": "Internal server error." }))).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

pub fn body_errors(rejection: JsonRejection) -> ValidationErrors {
    ValidationErrors::single("body", rejection.body_text())
}

pub fn invalid_body(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::Validation(body_errors(rejection))
}
