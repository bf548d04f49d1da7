use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::{Value, json};

use crate::modules::attendance::use_cases::list_attendees::inbound::http as list_attendees_http;
use crate::modules::attendance::use_cases::override_status::inbound::http as override_status_http;
use crate::modules::attendance::use_cases::scan_attendance::inbound::http as scan_http;
use crate::modules::attendance::use_cases::send_confirmation::inbound::http as send_confirmation_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::reports::use_cases::attendance_report::inbound::http as report_http;
use crate::modules::reports::use_cases::dashboard::inbound::http as dashboard_http;
use crate::modules::students::use_cases::delete_student::inbound::http as delete_student_http;
use crate::modules::students::use_cases::list_students::inbound::http as list_students_http;
use crate::modules::students::use_cases::register_student::inbound::http as register_student_http;
use crate::modules::students::use_cases::student_qr_payload::inbound::http as student_qr_http;
use crate::modules::students::use_cases::update_student::inbound::http as update_student_http;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/scan", post(scan_http::handle))
        .route(
            "/students",
            get(list_students_http::handle).post(register_student_http::handle),
        )
        .route(
            "/students/{id}",
            get(list_students_http::get_one)
                .put(update_student_http::handle)
                .delete(delete_student_http::handle),
        )
        .route("/students/{id}/qr", get(student_qr_http::handle))
        .route(
            "/events",
            get(list_events_http::handle).post(create_event_http::handle),
        )
        .route(
            "/events/{id}",
            get(list_events_http::get_one)
                .put(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route("/events/{id}/attendees", get(list_attendees_http::handle))
        .route("/attendance/{id}/status", put(override_status_http::handle))
        .route("/reports", get(report_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route(
            "/notifications/attendance-confirmation",
            post(send_confirmation_http::handle),
        )
        .with_state(state)
}
