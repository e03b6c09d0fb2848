use std::sync::Arc;

use filmgraph_core::memory::MemoryStore;
use filmgraph_core::service::{FilmsService, PeopleService};
use filmgraph_core::storage::{FilmStore, FriendshipStore, LikeStore, LookupStore, PersonStore};
use filmgraph_db::repositories::{
    PgFilmStore, PgFriendshipStore, PgLikeStore, PgLookupStore, PgPersonStore,
};
use filmgraph_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The services
/// depend only on the storage traits, so the same state shape serves both
/// backends.
#[derive(Clone)]
pub struct AppState {
    /// People catalog and friendship operations.
    pub people: Arc<PeopleService>,
    /// Film catalog, like operations, and the popularity query.
    pub films: Arc<FilmsService>,
    /// Closed genre / MPA rating sets, read directly by handlers.
    pub lookup: Arc<dyn LookupStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the services over the in-memory backend.
    pub fn in_memory(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::assemble(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            config,
        )
    }

    /// Wire the services over the Postgres backend.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        Self::assemble(
            Arc::new(PgPersonStore::new(pool.clone())),
            Arc::new(PgFilmStore::new(pool.clone())),
            Arc::new(PgFriendshipStore::new(pool.clone())),
            Arc::new(PgLikeStore::new(pool.clone())),
            Arc::new(PgLookupStore::new(pool)),
            config,
        )
    }

    fn assemble(
        people: Arc<dyn PersonStore>,
        films: Arc<dyn FilmStore>,
        friendships: Arc<dyn FriendshipStore>,
        likes: Arc<dyn LikeStore>,
        lookup: Arc<dyn LookupStore>,
        config: ServerConfig,
    ) -> Self {
        Self {
            people: Arc::new(PeopleService::new(people.clone(), friendships)),
            films: Arc::new(FilmsService::new(films, people, likes, lookup.clone())),
            lookup,
            config: Arc::new(config),
        }
    }
}
