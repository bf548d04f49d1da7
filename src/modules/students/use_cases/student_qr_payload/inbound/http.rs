use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::students::use_cases::student_qr_payload::handler;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct QrPayloadResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Exact text to encode into the QR image.
    pub payload: String,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match handler::handle(state.students.as_ref(), &id).await {
        Ok(qr) => {
            let payload = qr.encode();
            (
                StatusCode::OK,
                Json(QrPayloadResponse {
                    id: qr.id,
                    name: qr.name,
                    email: qr.email,
                    payload,
                }),
            )
                .into_response()
        }
        Err(e) => application_error_response(e),
    }
}
