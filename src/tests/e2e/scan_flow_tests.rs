// Drives a whole event day through the assembled router: registration,
// QR lookup, check-in and check-out scans, a manual override, reporting
// and the cascading delete.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::{TestApp, body_json, make_test_state};

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes_are_json = response
        .headers()
        .get("content-type")
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    let body = if bytes_are_json {
        body_json(response).await
    } else {
        Value::Null
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn scan(app: &Router, payload: &str, event_id: &str, mode: &str) -> (StatusCode, Value) {
    call(
        app,
        json_request(
            "POST",
            "/scan",
            json!({ "payload": payload, "event_id": event_id, "mode": mode, "recorded_by": "staff-1" }),
        ),
    )
    .await
}

async fn register_and_create(app: &Router) -> (String, String, String) {
    let (status, student) = call(
        app,
        json_request(
            "POST",
            "/students",
            json!({ "student_id": "2024001", "name": "Ada Lovelace", "email": "ada@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, event) = call(
        app,
        json_request(
            "POST",
            "/events",
            json!({
                "title": "Opening Keynote",
                "location": "Hall A",
                "start_date": 1_700_000_000_000i64,
                "end_date": 1_700_003_600_000i64,
                "created_by": "staff-1",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let student_id = student["id"].as_str().unwrap().to_string();
    let (status, qr) = call(app, get(&format!("/students/{student_id}/qr"))).await;
    assert_eq!(status, StatusCode::OK);

    (
        student_id,
        event["id"].as_str().unwrap().to_string(),
        qr["payload"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn it_should_run_a_full_check_in_check_out_day() {
    let TestApp {
        state, notifier, ..
    } = make_test_state();
    let app = router(state);
    let (student_id, event_id, payload) = register_and_create(&app).await;

    let (status, body) = scan(&app, &payload, &event_id, "time-out").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "not-checked-in");

    let (_, body) = scan(&app, &payload, &event_id, "time-in").await;
    assert_eq!(body["outcome"], "checked-in");
    let record_id = body["record"]["id"].as_str().unwrap().to_string();
    let time_in = body["record"]["time_in"].as_i64().unwrap();

    let (_, body) = scan(&app, &payload, &event_id, "time-in").await;
    assert_eq!(body["outcome"], "already-checked-in");
    assert_eq!(body["record"]["id"], record_id.as_str());

    let (_, body) = scan(&app, &payload, &event_id, "time-out").await;
    assert_eq!(body["outcome"], "checked-out");
    assert!(body["record"]["time_out"].as_i64().unwrap() >= time_in);

    let (_, body) = scan(&app, &payload, &event_id, "time-out").await;
    assert_eq!(body["outcome"], "already-checked-out");

    let (_, body) = scan(&app, &payload, &event_id, "time-in").await;
    assert_eq!(body["outcome"], "already-checked-in");

    let subjects: Vec<String> = notifier
        .sent
        .lock()
        .await
        .iter()
        .map(|m| m.subject.clone())
        .collect();
    assert_eq!(
        subjects,
        vec![
            "Attendance Recorded: Opening Keynote".to_string(),
            "Attendance Complete: Opening Keynote".to_string(),
        ]
    );

    let (status, body) = call(
        &app,
        json_request(
            "PUT",
            &format!("/attendance/{record_id}/status"),
            json!({ "status": "late" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "late");

    let (_, attendees) = call(&app, get(&format!("/events/{event_id}/attendees?status=late"))).await;
    assert_eq!(attendees.as_array().map(Vec::len), Some(1));
    assert_eq!(attendees[0]["student"]["id"], student_id.as_str());

    let (_, report) = call(&app, get("/reports")).await;
    assert_eq!(report["stats"]["total"], 1);
    assert_eq!(report["stats"]["late"], 1);

    let (_, dashboard) = call(&app, get("/dashboard")).await;
    assert_eq!(dashboard["latest_events"][0]["id"], event_id.as_str());
    assert_eq!(dashboard["presence_rate"], 0);

    let (status, body) = call(
        &app,
        Request::delete(format!("/events/{event_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed_attendance"], 1);

    let (status, _) = scan(&app, &payload, &event_id, "time-in").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_keep_a_single_record_under_concurrent_check_ins() {
    let test_app = make_test_state();
    test_app.store.set_write_delay_ms(10);
    let app = router(test_app.state.clone());
    let (_, event_id, payload) = register_and_create(&app).await;

    let (first, second) = tokio::join!(
        scan(&app, &payload, &event_id, "time-in"),
        scan(&app, &payload, &event_id, "time-in"),
    );

    let mut outcomes = vec![
        first.1["outcome"].as_str().unwrap().to_string(),
        second.1["outcome"].as_str().unwrap().to_string(),
    ];
    outcomes.sort();
    assert_eq!(outcomes, vec!["already-checked-in", "checked-in"]);

    let (_, attendees) = call(&app, get(&format!("/events/{event_id}/attendees"))).await;
    assert_eq!(attendees.as_array().map(Vec::len), Some(1));
    assert_eq!(test_app.notifier.sent.lock().await.len(), 1);
}

#[tokio::test]
async fn it_should_record_scans_while_the_notifier_is_down() {
    let test_app = crate::tests::fixtures::app::make_offline_notifier_state();
    let app = router(test_app.state.clone());
    let (_, event_id, payload) = register_and_create(&app).await;

    let (status, body) = scan(&app, &payload, &event_id, "time-in").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "checked-in");
    assert!(test_app.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn it_should_reject_garbage_before_touching_anything() {
    let app = router(make_test_state().state);

    let (status, _) = scan(&app, "definitely not a qr payload", "e-1", "time-in").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = scan(&app, r#"{"id":""}"#, "e-1", "time-in").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = scan(&app, r#"{"id":"nobody"}"#, "e-1", "time-in").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
