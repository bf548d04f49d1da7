use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::record::AttendanceStatus;
use crate::modules::attendance::use_cases::override_status::handler;
use crate::shared::core::primitives::now_millis;
use crate::shell::responses::{application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct OverrideStatusBody {
    pub status: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    body: Result<Json<OverrideStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let status: AttendanceStatus = match body.status.parse() {
        Ok(s) => s,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("{e}")),
    };

    match handler::handle(state.attendance.as_ref(), &record_id, status, now_millis()).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => application_error_response(e),
    }
}

#[cfg(test)]
mod override_status_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use tower::ServiceExt;

    use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{body_json, make_test_state, seed_student_and_event};
    use crate::tests::fixtures::records::AttendanceRecordBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/attendance/{id}/status", put(handle))
            .with_state(state)
    }

    fn override_request(id: &str, body: &str) -> Request<Body> {
        Request::put(format!("/attendance/{id}/status"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_updated_record() {
        let test_app = make_test_state();
        seed_student_and_event(&test_app).await;
        let record = AttendanceRecordBuilder::new().build();
        test_app
            .store
            .insert_if_absent(record.clone())
            .await
            .expect("seed record failed");

        let response = app(test_app.state.clone())
            .oneshot(override_request(&record.id, r#"{"status":"Excused"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "excused");
        assert_eq!(json["id"], record.id.as_str());
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_status() {
        let response = app(make_test_state().state)
            .oneshot(override_request("att-1", r#"{"status":"sleeping"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_record() {
        let response = app(make_test_state().state)
            .oneshot(override_request("missing", r#"{"status":"late"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_without_a_status() {
        let response = app(make_test_state().state)
            .oneshot(override_request("att-1", r#"{}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
