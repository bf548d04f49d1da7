use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::students::adapters::outbound::repository::StudentOrder;
use crate::modules::students::use_cases::list_students::handler::{self, StudentQuery};
use crate::shell::responses::{application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ListStudentsQuery {
    pub search: Option<String>,
    /// `newest` (default) or `name`.
    pub order: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> impl IntoResponse {
    let order = match query.order.as_deref().map(str::trim) {
        None | Some("") | Some("newest") => StudentOrder::NewestFirst,
        Some("name") => StudentOrder::NameAscending,
        Some(other) => {
            return error_response(StatusCode::BAD_REQUEST, format!("unknown order: {other}"));
        }
    };
    let query = StudentQuery {
        search: query.search,
        order,
    };

    match handler::list(state.students.as_ref(), &query).await {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(e) => application_error_response(e),
    }
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match handler::get(state.students.as_ref(), &id).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => application_error_response(e),
    }
}
