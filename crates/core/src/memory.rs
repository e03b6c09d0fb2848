//! In-memory storage backend.
//!
//! One `RwLock` guards the whole relational state: both catalogs, the
//! identity counters, the friendship graph, the like index, and the
//! seeded lookup sets. A single lock makes every mutation atomic with
//! respect to the existence state it depends on: an edge insert and the
//! presence of its endpoints commit under the same write guard, and
//! entity deletion runs its edge cascade inside one critical section, so
//! readers always observe a consistent snapshot.
//!
//! Edge inserts re-verify endpoint presence under the guard, mirroring
//! the foreign-key constraints of the Postgres backend. Identity counters
//! only move forward, so deleted ids are never reused.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::graph::friendship::FriendshipGraph;
use crate::graph::likes::LikesIndex;
use crate::model::film::{Film, FilmDraft};
use crate::model::lookup::{self, Genre, MpaRating};
use crate::model::person::{Person, PersonDraft};
use crate::storage::{FilmStore, FriendshipStore, LikeStore, LookupStore, PersonStore};
use crate::types::DbId;

#[derive(Debug)]
struct State {
    people: BTreeMap<DbId, Person>,
    films: BTreeMap<DbId, Film>,
    next_person_id: DbId,
    next_film_id: DbId,
    friendships: FriendshipGraph,
    likes: LikesIndex,
    genres: Vec<Genre>,
    mpa_ratings: Vec<MpaRating>,
}

/// Map-backed implementation of every storage capability.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                people: BTreeMap::new(),
                films: BTreeMap::new(),
                next_person_id: 1,
                next_film_id: 1,
                friendships: FriendshipGraph::new(),
                likes: LikesIndex::new(),
                genres: lookup::seed_genres(),
                mpa_ratings: lookup::seed_mpa_ratings(),
            }),
        }
    }

    // A poisoned lock means a writer panicked mid-section; the state
    // itself is still structurally sound, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn all(&self) -> CoreResult<Vec<Person>> {
        Ok(self.read().people.values().cloned().collect())
    }

    async fn get(&self, id: DbId) -> CoreResult<Option<Person>> {
        Ok(self.read().people.get(&id).cloned())
    }

    async fn get_many(&self, ids: &[DbId]) -> CoreResult<Vec<Person>> {
        let state = self.read();
        let mut found: Vec<Person> = ids
            .iter()
            .filter_map(|id| state.people.get(id).cloned())
            .collect();
        found.sort_by_key(|p| p.id);
        found.dedup_by_key(|p| p.id);
        Ok(found)
    }

    async fn create(&self, draft: PersonDraft) -> CoreResult<Person> {
        let mut state = self.write();
        let id = state.next_person_id;
        state.next_person_id += 1;
        let person = Person {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
        };
        state.people.insert(id, person.clone());
        Ok(person)
    }

    async fn update(&self, person: Person) -> CoreResult<Option<Person>> {
        let mut state = self.write();
        if !state.people.contains_key(&person.id) {
            return Ok(None);
        }
        state.people.insert(person.id, person.clone());
        Ok(Some(person))
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        let mut state = self.write();
        let existed = state.people.remove(&id).is_some();
        if existed {
            // Cascade in the same critical section so no dangling edge is
            // ever observable.
            state.friendships.remove_member(id);
            state.likes.remove_person(id);
        }
        Ok(existed)
    }

    async fn exists(&self, id: DbId) -> CoreResult<bool> {
        Ok(self.read().people.contains_key(&id))
    }
}

#[async_trait]
impl FilmStore for MemoryStore {
    async fn all(&self) -> CoreResult<Vec<Film>> {
        Ok(self.read().films.values().cloned().collect())
    }

    async fn get(&self, id: DbId) -> CoreResult<Option<Film>> {
        Ok(self.read().films.get(&id).cloned())
    }

    async fn create(&self, draft: FilmDraft) -> CoreResult<Film> {
        let mut state = self.write();
        let id = state.next_film_id;
        state.next_film_id += 1;
        let film = Film {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            mpa: draft.mpa,
            genres: draft.genres,
        };
        state.films.insert(id, film.clone());
        Ok(film)
    }

    async fn update(&self, film: Film) -> CoreResult<Option<Film>> {
        let mut state = self.write();
        if !state.films.contains_key(&film.id) {
            return Ok(None);
        }
        state.films.insert(film.id, film.clone());
        Ok(Some(film))
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        let mut state = self.write();
        let existed = state.films.remove(&id).is_some();
        if existed {
            state.likes.remove_film(id);
        }
        Ok(existed)
    }

    async fn exists(&self, id: DbId) -> CoreResult<bool> {
        Ok(self.read().films.contains_key(&id))
    }
}

#[async_trait]
impl FriendshipStore for MemoryStore {
    async fn add(&self, a: DbId, b: DbId) -> CoreResult<()> {
        let mut state = self.write();
        if !state.people.contains_key(&a) {
            return Err(CoreError::not_found(EntityKind::Person, a));
        }
        if !state.people.contains_key(&b) {
            return Err(CoreError::not_found(EntityKind::Person, b));
        }
        state.friendships.add(a, b)
    }

    async fn remove(&self, a: DbId, b: DbId) -> CoreResult<bool> {
        Ok(self.write().friendships.remove(a, b))
    }

    async fn friends_of(&self, a: DbId) -> CoreResult<Vec<DbId>> {
        Ok(self.read().friendships.friends_of(a))
    }

    async fn common_friends(&self, a: DbId, b: DbId) -> CoreResult<Vec<DbId>> {
        Ok(self.read().friendships.common_friends(a, b))
    }
}

#[async_trait]
impl LikeStore for MemoryStore {
    async fn add(&self, film: DbId, person: DbId) -> CoreResult<bool> {
        let mut state = self.write();
        if !state.films.contains_key(&film) {
            return Err(CoreError::not_found(EntityKind::Film, film));
        }
        if !state.people.contains_key(&person) {
            return Err(CoreError::not_found(EntityKind::Person, person));
        }
        Ok(state.likes.add(film, person))
    }

    async fn remove(&self, film: DbId, person: DbId) -> CoreResult<bool> {
        Ok(self.write().likes.remove(film, person))
    }

    async fn likers_of(&self, film: DbId) -> CoreResult<Vec<DbId>> {
        Ok(self.read().likes.likers_of(film))
    }

    async fn count_by_film(&self) -> CoreResult<std::collections::HashMap<DbId, usize>> {
        Ok(self.read().likes.count_by_film())
    }
}

#[async_trait]
impl LookupStore for MemoryStore {
    async fn genres(&self) -> CoreResult<Vec<Genre>> {
        Ok(self.read().genres.clone())
    }

    async fn genre(&self, id: DbId) -> CoreResult<Option<Genre>> {
        Ok(self.read().genres.iter().find(|g| g.id == id).cloned())
    }

    async fn mpa_ratings(&self) -> CoreResult<Vec<MpaRating>> {
        Ok(self.read().mpa_ratings.clone())
    }

    async fn mpa(&self, id: DbId) -> CoreResult<Option<MpaRating>> {
        Ok(self.read().mpa_ratings.iter().find(|m| m.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    async fn add_person(store: &MemoryStore, login: &str) -> Person {
        let draft = PersonDraft {
            email: format!("{login}@example.com"),
            login: login.to_string(),
            name: login.to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };
        PersonStore::create(store, draft).await.unwrap()
    }

    async fn add_film(store: &MemoryStore, name: &str) -> Film {
        let mpa = LookupStore::mpa(store, 1).await.unwrap().unwrap();
        let draft = FilmDraft {
            name: name.to_string(),
            description: None,
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            duration: 90,
            mpa,
            genres: Vec::new(),
        };
        FilmStore::create(store, draft).await.unwrap()
    }

    #[tokio::test]
    async fn person_ids_are_monotonic_and_never_reused() {
        let store = MemoryStore::new();
        let first = add_person(&store, "a").await;
        let second = add_person(&store, "b").await;
        assert_eq!((first.id, second.id), (1, 2));

        assert!(PersonStore::delete(&store, second.id).await.unwrap());
        let third = add_person(&store, "c").await;
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn deleting_a_person_cascades_friendships_and_likes() {
        let store = MemoryStore::new();
        let a = add_person(&store, "a").await;
        let b = add_person(&store, "b").await;
        let film = add_film(&store, "Heat").await;

        FriendshipStore::add(&store, a.id, b.id).await.unwrap();
        LikeStore::add(&store, film.id, a.id).await.unwrap();

        PersonStore::delete(&store, a.id).await.unwrap();

        assert!(FriendshipStore::friends_of(&store, b.id)
            .await
            .unwrap()
            .is_empty());
        assert!(LikeStore::likers_of(&store, film.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn deleting_a_film_cascades_likes() {
        let store = MemoryStore::new();
        let a = add_person(&store, "a").await;
        let film = add_film(&store, "Heat").await;
        LikeStore::add(&store, film.id, a.id).await.unwrap();

        FilmStore::delete(&store, film.id).await.unwrap();

        let counts = store.count_by_film().await.unwrap();
        assert!(counts.is_empty());
    }

    #[tokio::test]
    async fn edge_insert_enforces_endpoint_presence() {
        let store = MemoryStore::new();
        let a = add_person(&store, "a").await;

        let err = FriendshipStore::add(&store, a.id, 999).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound {
                kind: EntityKind::Person,
                id: 999
            }
        );

        let err = LikeStore::add(&store, 999, a.id).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound {
                kind: EntityKind::Film,
                id: 999
            }
        );
    }

    #[tokio::test]
    async fn lookup_sets_are_seeded() {
        let store = MemoryStore::new();
        assert_eq!(store.genres().await.unwrap().len(), 6);
        assert_eq!(store.mpa_ratings().await.unwrap().len(), 5);
        assert!(store.genre(7).await.unwrap().is_none());
        assert_eq!(
            LookupStore::mpa(&store, 3).await.unwrap().unwrap().code,
            "PG-13"
        );
    }

    #[tokio::test]
    async fn get_many_returns_existing_subset_in_id_order() {
        let store = MemoryStore::new();
        let a = add_person(&store, "a").await;
        let b = add_person(&store, "b").await;

        let found = store.get_many(&[b.id, 42, a.id]).await.unwrap();
        let ids: Vec<DbId> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}
