use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::use_cases::scan_attendance::command::ScanMode;
use crate::modules::attendance::use_cases::scan_attendance::handler::{ScanError, ScanRequest};
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::responses::{error_response, store_error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ScanBody {
    /// Text read from the QR code.
    pub payload: String,
    pub event_id: String,
    pub mode: ScanMode,
    #[serde(default)]
    pub recorded_by: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ScanBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let request = ScanRequest {
        payload: body.payload,
        event_id: body.event_id,
        mode: body.mode,
        recorded_by: body.recorded_by,
        scanned_at: now_millis(),
        record_id: new_id(),
    };

    match state.scan_handler.handle(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e @ ScanError::InvalidPayload(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ ScanError::NotFound { .. }) => error_response(StatusCode::NOT_FOUND, e.to_string()),
        Err(ScanError::StoreUnavailable(e)) => store_error_response(&e),
    }
}
