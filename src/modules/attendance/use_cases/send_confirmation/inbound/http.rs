use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::confirmation::Recipient;
use crate::modules::attendance::use_cases::send_confirmation::handler::{
    self, SendConfirmation, SendConfirmationError,
};
use crate::shell::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecipientBody {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct SendConfirmationBody {
    #[serde(default)]
    pub student: Option<RecipientBody>,
    #[serde(default, alias = "eventTitle")]
    pub event_title: Option<String>,
    #[serde(default, alias = "timeIn")]
    pub time_in: Option<i64>,
    #[serde(default, alias = "timeOut")]
    pub time_out: Option<i64>,
}

#[derive(Serialize)]
pub struct SendConfirmationResponse {
    pub success: bool,
    pub message_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SendConfirmationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SendConfirmation {
        recipient: body.student.map(|s| Recipient {
            name: s.name,
            email: s.email,
        }),
        event_title: body.event_title,
        time_in: body.time_in,
        time_out: body.time_out,
    };

    match handler::handle(state.notifier.as_ref(), command).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(SendConfirmationResponse {
                success: true,
                message_id: receipt.message_id,
            }),
        )
            .into_response(),
        Err(SendConfirmationError::MissingFields) => {
            error_response(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(SendConfirmationError::Notifier(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}
