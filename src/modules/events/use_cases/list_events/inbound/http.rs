use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::list_events::handler::{self, EventQuery};
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ListEventsQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> impl IntoResponse {
    let query = EventQuery {
        search: query.search,
        limit: query.limit,
    };
    match handler::list(state.events.as_ref(), &query).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => application_error_response(e),
    }
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match handler::get(state.events.as_ref(), &id).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => application_error_response(e),
    }
}
