use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::students::use_cases::delete_student::handler;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteStudentResponse {
    pub id: String,
    pub removed_attendance: usize,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match handler::handle(state.students.as_ref(), &id).await {
        Ok(removed_attendance) => (
            StatusCode::OK,
            Json(DeleteStudentResponse {
                id,
                removed_attendance,
            }),
        )
            .into_response(),
        Err(e) => application_error_response(e),
    }
}
