use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use webhook_audit_backend::{routes, store::MemoryStore, AppState};

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    Router::new()
        .route("/producer", post(routes::producer::register_producer))
        .with_state(state)
}

fn register(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/producer")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn first_registration_creates_producer() {
    let app = app();

    let resp = app
        .oneshot(register(json!({ "url": "http://a.com" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = json_body(resp).await;
    assert_eq!(body["url"], "http://a.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["lastAccessed"].is_string());
}

#[tokio::test]
async fn repeat_registration_returns_existing_producer() {
    let app = app();

    let first = app
        .clone()
        .oneshot(register(json!({ "url": "http://a.com" })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_body = json_body(first).await;

    let second = app
        .oneshot(register(json!({ "url": "http://a.com" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let second_body = json_body(second).await;

    assert_eq!(first_body["id"], second_body["id"]);
    assert_eq!(first_body["lastAccessed"], second_body["lastAccessed"]);
}

#[tokio::test]
async fn registration_is_case_insensitive() {
    let app = app();

    let first = app
        .clone()
        .oneshot(register(json!({ "url": "http://a.com" })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_body = json_body(first).await;

    let second = app
        .oneshot(register(json!({ "url": "HTTP://A.COM" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let second_body = json_body(second).await;

    assert_eq!(first_body["id"], second_body["id"]);
    // The stored casing is the one that registered first.
    assert_eq!(second_body["url"], "http://a.com");
}

#[tokio::test]
async fn missing_url_is_rejected() {
    let app = app();

    let resp = app.oneshot(register(json!({}))).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn empty_url_is_rejected() {
    let app = app();

    let resp = app.oneshot(register(json!({ "url": "  " }))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
