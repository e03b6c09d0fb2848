//! Routes for the genre lookup set, mounted at `/genres`.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list_genres))
        .route("/{id}", get(genres::get_genre))
}
