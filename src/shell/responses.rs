use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn store_error_response(error: &StoreError) -> Response {
    tracing::error!(error = %error, "store call failed");
    match error {
        StoreError::Unavailable(_) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
        }
        StoreError::Conflict(message) => error_response(StatusCode::CONFLICT, message.clone()),
    }
}

pub fn application_error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),
        e @ ApplicationError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, e.to_string()),
        ApplicationError::Store(e) => store_error_response(&e),
    }
}
