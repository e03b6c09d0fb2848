//! Integration tests for the genre and MPA rating lookup endpoints.

mod common;

use axum::http::{Method, StatusCode};

use common::{send, test_app};

#[tokio::test]
async fn genres_are_seeded_and_id_ordered() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/genres", None).await;

    assert_eq!(status, StatusCode::OK);
    let genres = body["data"].as_array().unwrap();
    assert_eq!(genres.len(), 6);
    assert_eq!(genres[0]["name"], "Comedy");
    assert_eq!(genres[5]["name"], "Action");
}

#[tokio::test]
async fn genre_by_id_and_missing_genre() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/genres/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Drama");

    let (status, body) = send(&app, Method::GET, "/api/v1/genres/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn mpa_ratings_are_seeded_with_descriptions() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/mpa", None).await;
    assert_eq!(status, StatusCode::OK);
    let ratings = body["data"].as_array().unwrap();
    assert_eq!(ratings.len(), 5);

    let (status, body) = send(&app, Method::GET, "/api/v1/mpa/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "PG-13");
    assert!(!body["data"]["description"].as_str().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, "/api/v1/mpa/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
