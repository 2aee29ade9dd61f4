use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{delete, get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use webhook_audit_backend::{routes, store::MemoryStore, AppState};

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::with_master(
        "https://hooks.example.com",
    )));
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/masterWebhookServer",
            get(routes::master::get_master_webhook_server),
        )
        .route("/producer", post(routes::producer::register_producer))
        .route(
            "/request",
            post(routes::request::log_request).get(routes::request::list_requests),
        )
        .route(
            "/request/:id/headers",
            get(routes::request::get_request_headers),
        )
        .route("/purge", delete(routes::request::purge_request_records))
        .with_state(state)
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn register_log_inspect_and_purge() {
    let app = app();

    // Register a producer.
    let resp = app
        .clone()
        .oneshot(request("POST", "/producer", Some(json!({ "url": "http://x" }))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let producer_id = json_body(resp).await["id"].as_i64().unwrap();

    // Log a day-old delivery attributed to it.
    let delivery = json!({
        "producerId": producer_id,
        "url": "http://x/hook",
        "timestamp": Utc::now() - Duration::days(1),
        "httpMethod": "PUT",
        "headers": { "X-Delivery": "7" },
        "responseStatus": 204,
        "responseTime": 0.8,
    });
    let resp = app
        .clone()
        .oneshot(request("POST", "/request", Some(delivery)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let record = json_body(resp).await;
    let record_id = record["id"].as_i64().unwrap();
    assert_eq!(record["producerId"].as_i64(), Some(producer_id));

    // The listing reflects the stored record.
    let listed = json_body(
        app.clone()
            .oneshot(request(
                "GET",
                &format!("/request?ProducerId={}", producer_id),
                None,
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Its headers decode back to the original mapping.
    let headers = json_body(
        app.clone()
            .oneshot(request(
                "GET",
                &format!("/request/{}/headers", record_id),
                None,
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(headers, json!({ "X-Delivery": "7" }));

    // A generous retention window keeps the day-old record.
    let resp = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/purge?DaysToKeep=365&ProducerId={}", producer_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!(false));

    // A zero-day window removes it.
    let resp = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/purge?DaysToKeep=0&ProducerId={}", producer_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(json_body(resp).await, json!(true));

    let listed = json_body(
        app.oneshot(request(
            "GET",
            &format!("/request?ProducerId={}", producer_id),
            None,
        ))
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}
