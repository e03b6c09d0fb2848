//! Repository for the `genres` and `mpa_ratings` lookup tables.

use async_trait::async_trait;

use filmgraph_core::error::CoreResult;
use filmgraph_core::model::lookup::{self, Genre, MpaRating};
use filmgraph_core::storage::LookupStore;
use filmgraph_core::types::DbId;

use crate::repositories::internal;
use crate::DbPool;

/// Postgres implementation of the closed lookup sets.
pub struct PgLookupStore {
    pool: DbPool,
}

impl PgLookupStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn mpa_from(id: DbId, code: String) -> MpaRating {
    MpaRating {
        id,
        description: lookup::mpa_description(&code).to_string(),
        code,
    }
}

#[async_trait]
impl LookupStore for PgLookupStore {
    async fn genres(&self) -> CoreResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, (DbId, String)>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| Genre { id, name })
            .collect())
    }

    async fn genre(&self, id: DbId) -> CoreResult<Option<Genre>> {
        let row = sqlx::query_as::<_, (DbId, String)>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;
        Ok(row.map(|(id, name)| Genre { id, name }))
    }

    async fn mpa_ratings(&self) -> CoreResult<Vec<MpaRating>> {
        let rows =
            sqlx::query_as::<_, (DbId, String)>("SELECT id, code FROM mpa_ratings ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(internal)?;
        Ok(rows.into_iter().map(|(id, code)| mpa_from(id, code)).collect())
    }

    async fn mpa(&self, id: DbId) -> CoreResult<Option<MpaRating>> {
        let row =
            sqlx::query_as::<_, (DbId, String)>("SELECT id, code FROM mpa_ratings WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(internal)?;
        Ok(row.map(|(id, code)| mpa_from(id, code)))
    }
}
