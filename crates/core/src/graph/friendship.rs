//! Symmetric friendship graph over person identities.
//!
//! An edge is an unordered pair of distinct identities. Insertion writes
//! both adjacency sets in one call, so symmetry holds by construction and
//! is never inferred. The structure performs no existence checks; callers
//! go through the service layer for referential integrity.

use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

/// Adjacency-set representation of the mutual friendship relation.
#[derive(Debug, Default)]
pub struct FriendshipGraph {
    edges: HashMap<DbId, HashSet<DbId>>,
}

impl FriendshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge `{a, b}`.
    ///
    /// Fails with `InvalidArgument` when `a == b` and with `AlreadyExists`
    /// when the pair already shares an edge. On success both sides see the
    /// new friend.
    pub fn add(&mut self, a: DbId, b: DbId) -> CoreResult<()> {
        if a == b {
            return Err(CoreError::InvalidArgument(
                "A person cannot befriend themselves".into(),
            ));
        }
        if self.contains(a, b) {
            return Err(CoreError::AlreadyExists { a, b });
        }
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
        Ok(())
    }

    /// Remove the edge `{a, b}` if present. Absence is a no-op; returns
    /// whether an edge was actually removed.
    pub fn remove(&mut self, a: DbId, b: DbId) -> bool {
        let removed = self
            .edges
            .get_mut(&a)
            .is_some_and(|set| set.remove(&b));
        if removed {
            if let Some(set) = self.edges.get_mut(&b) {
                set.remove(&a);
            }
        }
        removed
    }

    /// Whether `a` and `b` share an edge.
    pub fn contains(&self, a: DbId, b: DbId) -> bool {
        self.edges.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Identities sharing an edge with `a`, ascending.
    pub fn friends_of(&self, a: DbId) -> Vec<DbId> {
        let mut ids: Vec<DbId> = self
            .edges
            .get(&a)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Intersection of the two friend sets, ascending. `a == b`
    /// degenerates to `friends_of(a)`.
    pub fn common_friends(&self, a: DbId, b: DbId) -> Vec<DbId> {
        if a == b {
            return self.friends_of(a);
        }
        let empty = HashSet::new();
        let friends_a = self.edges.get(&a).unwrap_or(&empty);
        let friends_b = self.edges.get(&b).unwrap_or(&empty);
        let mut ids: Vec<DbId> = friends_a.intersection(friends_b).copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Remove every edge touching `a`. Used when a person leaves the
    /// catalog so no dangling edge survives.
    pub fn remove_member(&mut self, a: DbId) {
        if let Some(friends) = self.edges.remove(&a) {
            for friend in friends {
                if let Some(set) = self.edges.get_mut(&friend) {
                    set.remove(&a);
                }
            }
        }
    }
}
