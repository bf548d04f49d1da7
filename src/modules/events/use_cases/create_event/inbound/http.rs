use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::event::EventDetails;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::handler;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    #[serde(flatten)]
    pub details: EventDetails,
    pub created_by: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEvent {
        id: new_id(),
        details: body.details,
        created_by: body.created_by,
        created_at: now_millis(),
    };

    match handler::handle(state.events.as_ref(), command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => application_error_response(e),
    }
}
