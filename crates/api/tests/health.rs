mod common;

use axum::http::{Method, StatusCode};

use common::{send, test_app};

#[tokio::test]
async fn health_check_reports_ok() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
