use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::record::AttendanceStatus;
use crate::modules::attendance::use_cases::list_attendees::handler::{self, AttendeeFilter};
use crate::shell::responses::{application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct AttendeesQuery {
    pub search: Option<String>,
    /// One of the attendance statuses, or `all`.
    pub status: Option<String>,
}

fn parse_status_filter(
    raw: Option<&str>,
) -> Result<Option<AttendanceStatus>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(|e| format!("{e}")),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<AttendeesQuery>,
) -> impl IntoResponse {
    let status = match parse_status_filter(query.status.as_deref()) {
        Ok(s) => s,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };
    let filter = AttendeeFilter {
        search: query.search,
        status,
    };

    match handler::handle(
        state.events.as_ref(),
        state.students.as_ref(),
        state.attendance.as_ref(),
        &event_id,
        &filter,
    )
    .await
    {
        Ok(attendees) => (StatusCode::OK, Json(attendees)).into_response(),
        Err(e) => application_error_response(e),
    }
}
