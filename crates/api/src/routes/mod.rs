//! Route definitions, one module per resource.

pub mod films;
pub mod genres;
pub mod health;
pub mod mpa;
pub mod people;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /people      person CRUD, friendships
/// /films       film CRUD, likes, popularity
/// /genres      genre lookup
/// /mpa         MPA rating lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", people::router())
        .nest("/films", films::router())
        .nest("/genres", genres::router())
        .nest("/mpa", mpa::router())
}
