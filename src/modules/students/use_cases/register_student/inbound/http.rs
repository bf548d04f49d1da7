use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::students::core::student::StudentDetails;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::modules::students::use_cases::register_student::handler;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StudentDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterStudent {
        id: new_id(),
        qr_code: new_id(),
        details,
        registered_at: now_millis(),
    };

    match handler::handle(state.students.as_ref(), command).await {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(e) => application_error_response(e),
    }
}
