//! Popularity ranking over the film catalog.
//!
//! Stateless: every call recomputes from the film universe and a like
//! count snapshot, so the result can never go stale. Descending like
//! count, ties broken by ascending film id, which makes the order total
//! and deterministic. Films nobody has liked are eligible and sort after
//! all liked films.

use std::collections::HashMap;

use crate::types::DbId;

/// Rank `films` by like count and truncate to `limit`.
pub fn rank(films: impl IntoIterator<Item = DbId>, counts: &HashMap<DbId, usize>, limit: usize) -> Vec<DbId> {
    let mut ranked: Vec<(DbId, usize)> = films
        .into_iter()
        .map(|id| (id, counts.get(&id).copied().unwrap_or(0)))
        .collect();
    ranked.sort_by(|(id_a, count_a), (id_b, count_b)| {
        count_b.cmp(count_a).then(id_a.cmp(id_b))
    });
    ranked.truncate(limit);
    ranked.into_iter().map(|(id, _)| id).collect()
}
