use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::reports::use_cases::dashboard::handler;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match handler::handle(
        state.students.as_ref(),
        state.events.as_ref(),
        state.attendance.as_ref(),
    )
    .await
    {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(e) => application_error_response(e),
    }
}
