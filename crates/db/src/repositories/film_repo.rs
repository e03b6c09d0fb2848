//! Repository for the `films` and `film_genres` tables.

use std::collections::HashMap;

use async_trait::async_trait;

use filmgraph_core::error::CoreResult;
use filmgraph_core::model::film::{Film, FilmDraft};
use filmgraph_core::model::lookup::Genre;
use filmgraph_core::storage::FilmStore;
use filmgraph_core::types::DbId;

use crate::models::film::{FilmGenreRow, FilmRow};
use crate::repositories::internal;
use crate::DbPool;

/// Column list for `films` joined with `mpa_ratings`.
const FILM_COLUMNS: &str = "\
    f.id, f.name, f.description, f.release_date, f.duration, \
    m.id AS mpa_id, m.code AS mpa_code";

/// Postgres implementation of the film catalog.
pub struct PgFilmStore {
    pool: DbPool,
}

impl PgFilmStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load the genre lists for a batch of films in one query.
    async fn genres_for(&self, film_ids: &[DbId]) -> CoreResult<HashMap<DbId, Vec<Genre>>> {
        if film_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, FilmGenreRow>(
            "SELECT fg.film_id, g.id, g.name \
             FROM film_genres fg \
             JOIN genres g ON g.id = fg.genre_id \
             WHERE fg.film_id = ANY($1) \
             ORDER BY fg.film_id, g.id",
        )
        .bind(film_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)?;

        let mut by_film: HashMap<DbId, Vec<Genre>> = HashMap::new();
        for row in rows {
            by_film.entry(row.film_id).or_default().push(Genre {
                id: row.id,
                name: row.name,
            });
        }
        Ok(by_film)
    }

    /// Replace the genre rows for a film inside the given transaction.
    async fn save_genres(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        film_id: DbId,
        genres: &[Genre],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM film_genres WHERE film_id = $1")
            .bind(film_id)
            .execute(&mut **tx)
            .await?;
        for genre in genres {
            sqlx::query("INSERT INTO film_genres (film_id, genre_id) VALUES ($1, $2)")
                .bind(film_id)
                .bind(genre.id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl FilmStore for PgFilmStore {
    async fn all(&self) -> CoreResult<Vec<Film>> {
        let query = format!(
            "SELECT {FILM_COLUMNS} FROM films f \
             JOIN mpa_ratings m ON m.id = f.mpa_rating_id \
             ORDER BY f.id"
        );
        let rows = sqlx::query_as::<_, FilmRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut genres = self.genres_for(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let film_genres = genres.remove(&row.id).unwrap_or_default();
                row.into_film(film_genres)
            })
            .collect())
    }

    async fn get(&self, id: DbId) -> CoreResult<Option<Film>> {
        let query = format!(
            "SELECT {FILM_COLUMNS} FROM films f \
             JOIN mpa_ratings m ON m.id = f.mpa_rating_id \
             WHERE f.id = $1"
        );
        let row = sqlx::query_as::<_, FilmRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        match row {
            Some(row) => {
                let mut genres = self.genres_for(&[row.id]).await?;
                let film_genres = genres.remove(&row.id).unwrap_or_default();
                Ok(Some(row.into_film(film_genres)))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, draft: FilmDraft) -> CoreResult<Film> {
        let mut tx = self.pool.begin().await.map_err(internal)?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO films (name, description, release_date, duration, mpa_rating_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.release_date)
        .bind(draft.duration)
        .bind(draft.mpa.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(internal)?;

        Self::save_genres(&mut tx, id, &draft.genres)
            .await
            .map_err(internal)?;
        tx.commit().await.map_err(internal)?;

        Ok(Film {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            mpa: draft.mpa,
            genres: draft.genres,
        })
    }

    async fn update(&self, film: Film) -> CoreResult<Option<Film>> {
        let mut tx = self.pool.begin().await.map_err(internal)?;

        let result = sqlx::query(
            "UPDATE films SET name = $2, description = $3, release_date = $4, \
             duration = $5, mpa_rating_id = $6 \
             WHERE id = $1",
        )
        .bind(film.id)
        .bind(&film.name)
        .bind(&film.description)
        .bind(film.release_date)
        .bind(film.duration)
        .bind(film.mpa.id)
        .execute(&mut *tx)
        .await
        .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::save_genres(&mut tx, film.id, &film.genres)
            .await
            .map_err(internal)?;
        tx.commit().await.map_err(internal)?;

        Ok(Some(film))
    }

    async fn delete(&self, id: DbId) -> CoreResult<bool> {
        // Genre rows and likes go with the film via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM films WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: DbId) -> CoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM films WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(internal)
    }
}
