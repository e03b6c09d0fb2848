//! Repository layer.
//!
//! Each repository holds the connection pool and implements the matching
//! `filmgraph-core` storage trait. Backend failures are traced here and
//! surfaced as `CoreError::Internal`.

pub mod film_repo;
pub mod friendship_repo;
pub mod like_repo;
pub mod lookup_repo;
pub mod person_repo;

pub use film_repo::PgFilmStore;
pub use friendship_repo::PgFriendshipStore;
pub use like_repo::PgLikeStore;
pub use lookup_repo::PgLookupStore;
pub use person_repo::PgPersonStore;

use filmgraph_core::error::CoreError;

/// Map a sqlx failure to the core error surface. The full error is
/// traced; the HTTP boundary sanitizes the message further.
pub(crate) fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
