//! Shared helpers for the API integration tests.
//!
//! Tests run against the in-memory backend, so the full HTTP stack
//! (router, middleware, handlers, services, storage) is exercised
//! hermetically.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use filmgraph_api::config::{ServerConfig, StorageBackend};
use filmgraph_api::router;
use filmgraph_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
    }
}

/// Build the full application router over a fresh in-memory backend.
pub fn test_app() -> Router {
    router::build(AppState::in_memory(test_config()))
}

/// Send one request and decode the response body as JSON (null for an
/// empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request is served");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, json)
}

/// Create a person and return their id.
pub async fn create_person(app: &Router, login: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/people",
        Some(json!({
            "email": format!("{login}@example.com"),
            "login": login,
            "birthday": "1990-01-01",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("person id")
}

/// Create a film with the given name and genres and return its id.
pub async fn create_film(app: &Router, name: &str, genre_ids: &[i64]) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/films",
        Some(json!({
            "name": name,
            "description": "A film",
            "release_date": "2000-01-01",
            "duration": 120,
            "mpa_id": 1,
            "genre_ids": genre_ids,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("film id")
}
