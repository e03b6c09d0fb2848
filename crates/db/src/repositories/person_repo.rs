//! Repository for the `people` table.

use async_trait::async_trait;

use filmgraph_core::error::CoreResult;
use filmgraph_core::model::person::{Person, PersonDraft};
use filmgraph_core::storage::PersonStore;
use filmgraph_core::types::DbId;

use crate::models::person::PersonRow;
use crate::repositories::internal;
use crate::DbPool;

/// Column list for `people` queries.
const PERSON_COLUMNS: &str = "id, email, login, name, birthday";

/// Postgres implementation of the people catalog.
pub struct PgPersonStore {
    pool: DbPool,
}

impl PgPersonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn all(&self) -> CoreResult<Vec<Person>> {
        let query = format!("SELECT {PERSON_COLUMNS} FROM people ORDER BY id");
        let rows = sqlx::query_as::<_, PersonRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get(&self, id: DbId) -> CoreResult<Option<Person>> {
        let query = format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = $1");
        let row = sqlx::query_as::<_, PersonRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;
        Ok(row.map(Person::from))
    }

    async fn get_many(&self, ids: &[DbId]) -> CoreResult<Vec<Person>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ANY($1) ORDER BY id");
        let rows = sqlx::query_as::<_, PersonRow>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn create(&self, draft: PersonDraft) -> CoreResult<Person> {
        let query = format!(
            "INSERT INTO people (email, login, name, birthday) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PERSON_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PersonRow>(&query)
            .bind(&draft.email)
            .bind(&draft.login)
            .bind(&draft.name)
            .bind(draft.birthday)
            .fetch_one(&self.pool)
            .await
            .map_err(internal)?;
        Ok(row.into())
    }

    async fn update(&self, person: Person) -> CoreResult<Option<Person>> {
        let query = format!(
            "UPDATE people SET email = $2, login = $3, name = $4, birthday = $5 \
             WHERE id = $1 \
             RETURNING {PERSON_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PersonRow>(&query)
            .bind(person.id)
            .bind(&person.email)
            .bind(&person.login)
            .bind(&person.name)
            .bind(person.birthday)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;
        Ok(row.map(Person::from))
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        // Friendship and like edges go with the row via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: DbId) -> CoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM people WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(internal)
    }
}
