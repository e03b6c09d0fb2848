//! Routes for the people catalog, mounted at `/people`.
//!
//! ```text
//! GET    /                                -> list_people
//! POST   /                                -> create_person
//! GET    /{id}                            -> get_person
//! PUT    /{id}                            -> update_person
//! DELETE /{id}                            -> delete_person
//! GET    /{id}/friends                    -> list_friends
//! GET    /{id}/friends/common/{other_id}  -> common_friends
//! PUT    /{id}/friends/{friend_id}        -> add_friend
//! DELETE /{id}/friends/{friend_id}        -> remove_friend
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list_people).post(people::create_person))
        .route(
            "/{id}",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        )
        .route("/{id}/friends", get(people::list_friends))
        .route(
            "/{id}/friends/common/{other_id}",
            get(people::common_friends),
        )
        .route(
            "/{id}/friends/{friend_id}",
            put(people::add_friend).delete(people::remove_friend),
        )
}
