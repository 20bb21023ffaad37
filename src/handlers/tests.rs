use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::db::pool::test_pool;
use crate::{build_router, AppState};

async fn app() -> Router {
    build_router(AppState {
        db: test_pool().await,
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn invalid_data() -> Value {
    json!({ "success": false, "error": "Invalid data" })
}

#[tokio::test]
async fn unknown_day_returns_default_shape() {
    let app = app().await;
    let (status, body) = get_json(&app, "/api/day/2030-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "completedWorkouts": [],
            "todoList": [],
            "shlokaShown": false,
            "runList": [],
            "physicalTasks": [],
            "journalEntry": "",
        })
    );
}

#[tokio::test]
async fn save_daily_data_merges_into_the_day() {
    let app = app().await;

    let (status, body) = post_json(
        &app,
        "/api/save_daily_data",
        json!({ "date": "2025-01-01", "updates": { "completedWorkouts": ["A"], "journalEntry": "x" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    post_json(
        &app,
        "/api/save_daily_data",
        json!({ "date": "2025-01-01", "updates": { "todoList": [{"text": "B", "done": false}] } }),
    )
    .await;

    let (_, day) = get_json(&app, "/api/day/2025-01-01").await;
    assert_eq!(day["completedWorkouts"], json!(["A"]));
    assert_eq!(day["todoList"], json!([{"text": "B", "done": false}]));
    assert_eq!(day["journalEntry"], json!("x"));
}

#[tokio::test]
async fn save_daily_data_without_updates_is_rejected() {
    let app = app().await;
    let (status, body) =
        post_json(&app, "/api/save_daily_data", json!({ "date": "2025-01-01" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_data());
}

#[tokio::test]
async fn save_daily_data_without_date_is_rejected() {
    let app = app().await;
    let (status, body) =
        post_json(&app, "/api/save_daily_data", json!({ "updates": { "shlokaShown": true } })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_data());

    let (_, all) = get_json(&app, "/api/all_data").await;
    assert_eq!(all, json!({}));
}

#[tokio::test]
async fn save_daily_data_rejects_unknown_update_keys() {
    let app = app().await;
    let (status, body) = post_json(
        &app,
        "/api/save_daily_data",
        json!({ "date": "2025-01-01", "updates": { "mood": 4 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Unknown field: mood" }));
}

#[tokio::test]
async fn malformed_body_is_invalid_data() {
    let app = app().await;
    let (status, body) = post_raw(&app, "/api/save_journal", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_data());
}

#[tokio::test]
async fn save_journal_accepts_an_empty_entry() {
    let app = app().await;
    post_json(
        &app,
        "/api/save_journal",
        json!({ "date": "2025-01-01", "journalEntry": "old thoughts" }),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/api/save_journal",
        json!({ "date": "2025-01-01", "journalEntry": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, day) = get_json(&app, "/api/day/2025-01-01").await;
    assert_eq!(day["journalEntry"], json!(""));
}

#[tokio::test]
async fn save_journal_without_entry_is_rejected() {
    let app = app().await;
    let (status, body) = post_json(&app, "/api/save_journal", json!({ "date": "2025-01-01" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_data());
}

#[tokio::test]
async fn all_data_returns_every_day() {
    let app = app().await;
    for date in ["2025-03-01", "2025-03-02"] {
        post_json(
            &app,
            "/api/save_daily_data",
            json!({ "date": date, "updates": { "shlokaShown": true } }),
        )
        .await;
    }

    let (status, all) = get_json(&app, "/api/all_data").await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_object().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["2025-03-02"]["shlokaShown"], json!(true));
}

#[tokio::test]
async fn goal_can_be_set_and_cleared() {
    let app = app().await;

    let (status, body) = post_json(
        &app,
        "/api/set_goal",
        json!({ "goal": "Run marathon", "deadline": "2025-12-31" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let request = Request::builder()
        .method("POST")
        .uri("/api/delete_goal")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "success": true }));
}

#[tokio::test]
async fn index_embeds_page_data() {
    let app = app().await;
    post_json(
        &app,
        "/api/save_journal",
        json!({ "date": "2025-01-01", "journalEntry": "</script><b>bold</b>" }),
    )
    .await;
    post_json(&app, "/api/set_goal", json!({ "goal": "Run marathon", "deadline": null })).await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(!html.contains("{{ page_data }}"));
    assert!(html.contains(r#""today":""#));
    assert!(html.contains(r#""goal":"Run marathon""#));
    assert!(html.contains(r#"<\/script><b>bold<\/b>"#));
    assert!(!html.contains("</script><b>bold"));
}

#[tokio::test]
async fn health_endpoints_report_ok() {
    let app = app().await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("warriors-path"));

    let (status, body) = get_json(&app, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"], json!("ok"));
}
