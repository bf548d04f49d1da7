use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::use_cases::delete_event::handler;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub id: String,
    pub removed_attendance: usize,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match handler::handle(state.events.as_ref(), &id).await {
        Ok(removed_attendance) => (
            StatusCode::OK,
            Json(DeleteEventResponse {
                id,
                removed_attendance,
            }),
        )
            .into_response(),
        Err(e) => application_error_response(e),
    }
}
