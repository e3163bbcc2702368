//! End-to-end tests driving the router with in-memory requests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{router::router, state::AppState};


/// Builds a context with every table and a router with a memory-backed session layer.
async fn setup() -> (TestContext, Router) {
    setup_with_store(MemoryStore::default()).await
}

async fn setup_with_store(store: MemoryStore) -> (TestContext, Router) {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router()
        .with_state(AppState::new(db))
        .layer(SessionManagerLayer::new(store));

    (test, app)
}

/// Sends a request with an optional JSON body and returns the status and parsed body.
///
/// Empty bodies are returned as `Value::Null`.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, "PUT", uri, body).await
}

fn admission_body(full_name: &str) -> Value {
    json!({
        "full_name": full_name,
        "email": "applicant@example.com",
        "phone": "9800000000",
        "class_grade": "6",
        "dob": "2014-08-21",
        "parent_name": "Parent",
        "parent_phone": "9800000001"
    })
}
