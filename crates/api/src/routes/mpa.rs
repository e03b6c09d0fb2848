//! Routes for the MPA rating lookup set, mounted at `/mpa`.

use axum::routing::get;
use axum::Router;

use crate::handlers::mpa;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mpa::list_mpa_ratings))
        .route("/{id}", get(mpa::get_mpa_rating))
}
