//! Repository for the `likes` table.

use std::collections::HashMap;

use async_trait::async_trait;

use filmgraph_core::error::CoreResult;
use filmgraph_core::storage::LikeStore;
use filmgraph_core::types::DbId;

use crate::repositories::internal;
use crate::DbPool;

/// Postgres implementation of the like relation.
pub struct PgLikeStore {
    pool: DbPool,
}

impl PgLikeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeStore for PgLikeStore {
    async fn add(&self, film: DbId, person: DbId) -> CoreResult<bool> {
        let result = sqlx::query(
            "INSERT INTO likes (film_id, person_id) VALUES ($1, $2) \
             ON CONFLICT (film_id, person_id) DO NOTHING",
        )
        .bind(film)
        .bind(person)
        .execute(&self.pool)
        .await
        .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, film: DbId, person: DbId) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE film_id = $1 AND person_id = $2")
            .bind(film)
            .bind(person)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn likers_of(&self, film: DbId) -> CoreResult<Vec<DbId>> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT person_id FROM likes WHERE film_id = $1 ORDER BY person_id",
        )
        .bind(film)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)
    }

    async fn count_by_film(&self) -> CoreResult<HashMap<DbId, usize>> {
        let rows = sqlx::query_as::<_, (DbId, i64)>(
            "SELECT film_id, COUNT(person_id) FROM likes GROUP BY film_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(internal)?;
        Ok(rows
            .into_iter()
            .map(|(film, count)| (film, count as usize))
            .collect())
    }
}
