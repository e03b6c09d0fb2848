//! Repository for the `friendships` table.
//!
//! One row stores each unordered pair, normalized as
//! `(least, greatest)`, so the pair key is unique regardless of which
//! side initiated the friendship and symmetry cannot be violated by
//! construction.

use async_trait::async_trait;

use filmgraph_core::error::{CoreError, CoreResult};
use filmgraph_core::storage::FriendshipStore;
use filmgraph_core::types::DbId;

use crate::repositories::internal;
use crate::DbPool;

/// Postgres implementation of the friendship relation.
pub struct PgFriendshipStore {
    pool: DbPool,
}

impl PgFriendshipStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Normalize an unordered pair to its stored orientation.
fn normalized(a: DbId, b: DbId) -> (DbId, DbId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[async_trait]
impl FriendshipStore for PgFriendshipStore {
    async fn add(&self, a: DbId, b: DbId) -> CoreResult<()> {
        if a == b {
            return Err(CoreError::InvalidArgument(
                "A person cannot befriend themselves".into(),
            ));
        }
        let (lo, hi) = normalized(a, b);
        let result = sqlx::query(
            "INSERT INTO friendships (person_a, person_b) VALUES ($1, $2) \
             ON CONFLICT (person_a, person_b) DO NOTHING",
        )
        .bind(lo)
        .bind(hi)
        .execute(&self.pool)
        .await
        .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::AlreadyExists { a, b });
        }
        Ok(())
    }

    async fn remove(&self, a: DbId, b: DbId) -> CoreResult<bool> {
        let (lo, hi) = normalized(a, b);
        let result = sqlx::query("DELETE FROM friendships WHERE person_a = $1 AND person_b = $2")
            .bind(lo)
            .bind(hi)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn friends_of(&self, a: DbId) -> CoreResult<Vec<DbId>> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT friend_id FROM ( \
                 SELECT person_b AS friend_id FROM friendships WHERE person_a = $1 \
                 UNION ALL \
                 SELECT person_a AS friend_id FROM friendships WHERE person_b = $1 \
             ) f \
             ORDER BY friend_id",
        )
        .bind(a)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)
    }

    async fn common_friends(&self, a: DbId, b: DbId) -> CoreResult<Vec<DbId>> {
        // One statement, one snapshot. INTERSECT of identical sets is the
        // set itself, so the degenerate a == b case needs no special
        // handling.
        sqlx::query_scalar::<_, DbId>(
            "SELECT friend_id FROM ( \
                 SELECT person_b AS friend_id FROM friendships WHERE person_a = $1 \
                 UNION ALL \
                 SELECT person_a AS friend_id FROM friendships WHERE person_b = $1 \
             ) fa \
             INTERSECT \
             SELECT friend_id FROM ( \
                 SELECT person_b AS friend_id FROM friendships WHERE person_a = $2 \
                 UNION ALL \
                 SELECT person_a AS friend_id FROM friendships WHERE person_b = $2 \
             ) fb \
             ORDER BY friend_id",
        )
        .bind(a)
        .bind(b)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)
    }
}
