use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::core::report::ReportFilter;
use crate::modules::reports::use_cases::attendance_report::handler;
use crate::shell::responses::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ReportQuery {
    /// Epoch millis, exclusive.
    pub from: Option<i64>,
    /// Epoch millis, exclusive.
    pub to: Option<i64>,
    /// An event id, or `all`.
    pub event_id: Option<String>,
}

impl From<ReportQuery> for ReportFilter {
    fn from(q: ReportQuery) -> Self {
        Self {
            from: q.from,
            to: q.to,
            event_id: q
                .event_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty() && !id.eq_ignore_ascii_case("all")),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let filter = ReportFilter::from(query);
    match handler::handle(state.events.as_ref(), state.attendance.as_ref(), &filter).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => application_error_response(e),
    }
}
