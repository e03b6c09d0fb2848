//! Routes for the film catalog, mounted at `/films`.
//!
//! ```text
//! GET    /                          -> list_films
//! POST   /                          -> create_film
//! GET    /popular                   -> popular_films
//! GET    /{id}                      -> get_film
//! PUT    /{id}                      -> update_film
//! DELETE /{id}                      -> delete_film
//! GET    /{id}/likes                -> list_likers
//! PUT    /{id}/likes/{person_id}    -> add_like
//! DELETE /{id}/likes/{person_id}    -> remove_like
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(films::list_films).post(films::create_film))
        .route("/popular", get(films::popular_films))
        .route(
            "/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
        .route("/{id}/likes", get(films::list_likers))
        .route(
            "/{id}/likes/{person_id}",
            put(films::add_like).delete(films::remove_like),
        )
}
