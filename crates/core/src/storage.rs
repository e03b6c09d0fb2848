//! Storage capability traits.
//!
//! One polymorphic capability per catalog and relation, implemented by the
//! in-memory backend in this crate and the Postgres backend in
//! `filmgraph-db`. The service layer depends only on these traits, never
//! on which backend is active.
//!
//! Edge stores enforce referential integrity at commit time the way a
//! foreign key would (the in-memory backend checks under its write lock,
//! Postgres uses actual constraints); the friendly per-identity `NotFound`
//! errors still come from the service layer's pre-checks.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::model::film::{Film, FilmDraft};
use crate::model::lookup::{Genre, MpaRating};
use crate::model::person::{Person, PersonDraft};
use crate::types::DbId;

/// The people catalog.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All people, ascending by id.
    async fn all(&self) -> CoreResult<Vec<Person>>;

    async fn get(&self, id: DbId) -> CoreResult<Option<Person>>;

    /// The subset of `ids` that exists, ascending by id.
    async fn get_many(&self, ids: &[DbId]) -> CoreResult<Vec<Person>>;

    /// Insert a new record and assign the next identity. Identities are
    /// monotonically increasing and never reused.
    async fn create(&self, draft: PersonDraft) -> CoreResult<Person>;

    /// Replace the record with the given id. Returns `None` when the id
    /// is absent.
    async fn update(&self, person: Person) -> CoreResult<Option<Person>>;

    /// Remove the record and, in the same commit, every friendship and
    /// like edge touching it. Returns whether it existed.
    async fn delete(&self, id: DbId) -> CoreResult<bool>;

    async fn exists(&self, id: DbId) -> CoreResult<bool>;
}

/// The film catalog.
#[async_trait]
pub trait FilmStore: Send + Sync {
    /// All films, ascending by id.
    async fn all(&self) -> CoreResult<Vec<Film>>;

    async fn get(&self, id: DbId) -> CoreResult<Option<Film>>;

    async fn create(&self, draft: FilmDraft) -> CoreResult<Film>;

    async fn update(&self, film: Film) -> CoreResult<Option<Film>>;

    /// Remove the record and, in the same commit, every like attached to
    /// it. Returns whether it existed.
    async fn delete(&self, id: DbId) -> CoreResult<bool>;

    async fn exists(&self, id: DbId) -> CoreResult<bool>;
}

/// The symmetric friendship relation.
#[async_trait]
pub trait FriendshipStore: Send + Sync {
    /// Insert the edge `{a, b}`. Fails with `InvalidArgument` on a
    /// self-loop and `AlreadyExists` on a duplicate edge.
    async fn add(&self, a: DbId, b: DbId) -> CoreResult<()>;

    /// Remove the edge if present; absence is a no-op. Returns whether an
    /// edge was removed.
    async fn remove(&self, a: DbId, b: DbId) -> CoreResult<bool>;

    /// Identities sharing an edge with `a`, ascending.
    async fn friends_of(&self, a: DbId) -> CoreResult<Vec<DbId>>;

    /// Intersection of the two friend sets observed in one snapshot,
    /// ascending.
    async fn common_friends(&self, a: DbId, b: DbId) -> CoreResult<Vec<DbId>>;
}

/// The like relation between films and people.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Record the pair. Idempotent; returns whether it was newly
    /// inserted.
    async fn add(&self, film: DbId, person: DbId) -> CoreResult<bool>;

    /// Remove the pair if present; absence is a no-op.
    async fn remove(&self, film: DbId, person: DbId) -> CoreResult<bool>;

    /// People who like `film`, ascending.
    async fn likers_of(&self, film: DbId) -> CoreResult<Vec<DbId>>;

    /// Per-film like counts in one snapshot. Films with zero likes may be
    /// absent.
    async fn count_by_film(&self) -> CoreResult<HashMap<DbId, usize>>;
}

/// The closed genre and MPA rating reference sets.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// All genres, ascending by id.
    async fn genres(&self) -> CoreResult<Vec<Genre>>;

    async fn genre(&self, id: DbId) -> CoreResult<Option<Genre>>;

    /// All MPA ratings, ascending by id.
    async fn mpa_ratings(&self) -> CoreResult<Vec<MpaRating>>;

    async fn mpa(&self, id: DbId) -> CoreResult<Option<MpaRating>>;
}
