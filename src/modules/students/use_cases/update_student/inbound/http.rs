use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::students::core::student::StudentDetails;
use crate::modules::students::use_cases::update_student::handler;
use crate::shared::core::primitives::now_millis;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StudentDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match handler::handle(state.students.as_ref(), &id, details, now_millis()).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => application_error_response(e),
    }
}
