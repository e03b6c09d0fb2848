//! Integration tests for the people catalog and the friendship surface.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{create_person, send, test_app};

#[tokio::test]
async fn create_and_fetch_person() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/people",
        Some(json!({
            "email": "ada@example.com",
            "login": "ada",
            "birthday": "1990-01-01",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    // Name was omitted, so it defaults to the login.
    assert_eq!(body["data"]["name"], "ada");

    let (status, body) = send(&app, Method::GET, "/api/v1/people/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["login"], "ada");
}

#[tokio::test]
async fn create_rejects_malformed_email() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/people",
        Some(json!({
            "email": "not-an-email",
            "login": "ada",
            "birthday": "1990-01-01",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_person_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/people/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_person_applies_patch() {
    let app = test_app();
    let id = create_person(&app, "ada").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/people/{id}"),
        Some(json!({ "name": "Ada Lovelace" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["login"], "ada");
}

#[tokio::test]
async fn friendship_is_symmetric_and_duplicates_conflict() {
    let app = test_app();
    let a = create_person(&app, "ada").await;
    let b = create_person(&app, "bob").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/people/{a}/friends/{b}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Both sides see the edge after one add.
    let (_, body) = send(&app, Method::GET, &format!("/api/v1/people/{a}/friends"), None).await;
    assert_eq!(body["data"][0]["id"], b);
    let (_, body) = send(&app, Method::GET, &format!("/api/v1/people/{b}/friends"), None).await;
    assert_eq!(body["data"][0]["id"], a);

    // The reversed orientation is the same edge.
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/people/{b}/friends/{a}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn befriending_self_is_a_bad_request() {
    let app = test_app();
    let a = create_person(&app, "ada").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/people/{a}/friends/{a}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn befriending_a_missing_person_is_not_found() {
    let app = test_app();
    let a = create_person(&app, "ada").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/people/{a}/friends/999"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn common_friends_reflects_shared_edges() {
    let app = test_app();
    let a = create_person(&app, "ada").await;
    let b = create_person(&app, "bob").await;
    let c = create_person(&app, "cyd").await;

    for other in [b, c] {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/people/{a}/friends/{other}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, body) = send(&app, Method::GET, &format!("/api/v1/people/{a}/friends"), None).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![b, c]);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/people/{b}/friends/common/{c}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], a);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unfriending_is_idempotent() {
    let app = test_app();
    let a = create_person(&app, "ada").await;
    let b = create_person(&app, "bob").await;

    // No edge yet: still 204.
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/people/{a}/friends/{b}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    send(&app, Method::PUT, &format!("/api/v1/people/{a}/friends/{b}"), None).await;
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/people/{a}/friends/{b}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, body) = send(&app, Method::GET, &format!("/api/v1/people/{a}/friends"), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_person_removes_their_friendships() {
    let app = test_app();
    let a = create_person(&app, "ada").await;
    let b = create_person(&app, "bob").await;
    send(&app, Method::PUT, &format!("/api/v1/people/{a}/friends/{b}"), None).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/people/{a}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, &format!("/api/v1/people/{b}/friends"), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/people/{a}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
