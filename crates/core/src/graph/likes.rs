//! Bipartite like relation between films and people.
//!
//! A like is a membership flag, not a counter: liking an already-liked
//! film is a silent no-op. Both orientations are indexed so entity
//! deletion can cascade from either side without a full scan.

use std::collections::{HashMap, HashSet};

use crate::types::DbId;

/// Film ↔ person membership sets.
#[derive(Debug, Default)]
pub struct LikesIndex {
    by_film: HashMap<DbId, HashSet<DbId>>,
    by_person: HashMap<DbId, HashSet<DbId>>,
}

impl LikesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `person` likes `film`. Returns whether the pair was
    /// newly inserted; an existing pair is left untouched.
    pub fn add(&mut self, film: DbId, person: DbId) -> bool {
        let inserted = self.by_film.entry(film).or_default().insert(person);
        if inserted {
            self.by_person.entry(person).or_default().insert(film);
        }
        inserted
    }

    /// Remove the pair if present. Absence is a no-op; returns whether a
    /// pair was actually removed.
    pub fn remove(&mut self, film: DbId, person: DbId) -> bool {
        let removed = self
            .by_film
            .get_mut(&film)
            .is_some_and(|set| set.remove(&person));
        if removed {
            if let Some(set) = self.by_person.get_mut(&person) {
                set.remove(&film);
            }
        }
        removed
    }

    /// Number of distinct people who like `film`. Unknown films count 0.
    pub fn count(&self, film: DbId) -> usize {
        self.by_film.get(&film).map_or(0, HashSet::len)
    }

    /// Identities of the people who like `film`, ascending.
    pub fn likers_of(&self, film: DbId) -> Vec<DbId> {
        let mut ids: Vec<DbId> = self
            .by_film
            .get(&film)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Snapshot of per-film like counts. Films nobody has liked are
    /// absent; the ranking engine treats them as zero.
    pub fn count_by_film(&self) -> HashMap<DbId, usize> {
        self.by_film
            .iter()
            .map(|(&film, people)| (film, people.len()))
            .collect()
    }

    /// Cascade: drop every like placed by `person`.
    pub fn remove_person(&mut self, person: DbId) {
        if let Some(films) = self.by_person.remove(&person) {
            for film in films {
                if let Some(set) = self.by_film.get_mut(&film) {
                    set.remove(&person);
                }
            }
        }
    }

    /// Cascade: drop every like attached to `film`.
    pub fn remove_film(&mut self, film: DbId) {
        if let Some(people) = self.by_film.remove(&film) {
            for person in people {
                if let Some(set) = self.by_person.get_mut(&person) {
                    set.remove(&film);
                }
            }
        }
    }
}
