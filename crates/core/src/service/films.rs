//! Film catalog operations, the like surface, and the popularity query.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::graph::ranking;
use crate::model::film::{self, CreateFilm, Film, FilmDraft, UpdateFilm};
use crate::model::lookup::{Genre, MpaRating};
use crate::storage::{FilmStore, LikeStore, LookupStore, PersonStore};
use crate::types::DbId;

/// Film CRUD with lookup-reference checks, like operations, and the
/// most-liked ranking.
pub struct FilmsService {
    films: Arc<dyn FilmStore>,
    people: Arc<dyn PersonStore>,
    likes: Arc<dyn LikeStore>,
    lookup: Arc<dyn LookupStore>,
}

impl FilmsService {
    pub fn new(
        films: Arc<dyn FilmStore>,
        people: Arc<dyn PersonStore>,
        likes: Arc<dyn LikeStore>,
        lookup: Arc<dyn LookupStore>,
    ) -> Self {
        Self {
            films,
            people,
            likes,
            lookup,
        }
    }

    pub async fn all(&self) -> CoreResult<Vec<Film>> {
        self.films.all().await
    }

    pub async fn get(&self, id: DbId) -> CoreResult<Film> {
        self.films
            .get(id)
            .await?
            .ok_or(CoreError::not_found(EntityKind::Film, id))
    }

    pub async fn create(&self, input: CreateFilm) -> CoreResult<Film> {
        film::validate_film_fields(
            &input.name,
            input.description.as_deref(),
            input.release_date,
            input.duration,
        )?;
        let (mpa, genres) = self.resolve_refs(input.mpa_id, &input.genre_ids).await?;

        let film = self
            .films
            .create(FilmDraft {
                name: input.name,
                description: input.description,
                release_date: input.release_date,
                duration: input.duration,
                mpa,
                genres,
            })
            .await?;

        tracing::info!(film_id = film.id, "Film created");
        Ok(film)
    }

    pub async fn update(&self, id: DbId, input: UpdateFilm) -> CoreResult<Film> {
        let current = self.get(id).await?;

        let name = input.name.unwrap_or(current.name);
        let description = input.description.or(current.description);
        let release_date = input.release_date.unwrap_or(current.release_date);
        let duration = input.duration.unwrap_or(current.duration);
        film::validate_film_fields(&name, description.as_deref(), release_date, duration)?;

        let mpa_id = input.mpa_id.unwrap_or(current.mpa.id);
        let genre_ids: Vec<DbId> = match input.genre_ids {
            Some(ids) => ids,
            None => current.genres.iter().map(|g| g.id).collect(),
        };
        let (mpa, genres) = self.resolve_refs(mpa_id, &genre_ids).await?;

        let updated = self
            .films
            .update(Film {
                id,
                name,
                description,
                release_date,
                duration,
                mpa,
                genres,
            })
            .await?
            .ok_or(CoreError::not_found(EntityKind::Film, id))?;

        tracing::info!(film_id = id, "Film updated");
        Ok(updated)
    }

    /// Delete a film. The store cascades its likes in the same commit.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if !self.films.delete(id).await? {
            return Err(CoreError::not_found(EntityKind::Film, id));
        }
        tracing::info!(film_id = id, "Film deleted");
        Ok(())
    }

    /// Record that `person_id` likes `film_id`. Liking twice is a silent
    /// no-op, not an error.
    pub async fn add_like(&self, film_id: DbId, person_id: DbId) -> CoreResult<()> {
        self.ensure_film(film_id).await?;
        self.ensure_person(person_id).await?;

        let inserted = self.likes.add(film_id, person_id).await?;
        if inserted {
            tracing::info!(film_id, person_id, "Like recorded");
        } else {
            tracing::debug!(film_id, person_id, "Like already present");
        }
        Ok(())
    }

    /// Remove the like if present; absence is a no-op.
    pub async fn remove_like(&self, film_id: DbId, person_id: DbId) -> CoreResult<()> {
        self.ensure_film(film_id).await?;
        self.ensure_person(person_id).await?;

        let removed = self.likes.remove(film_id, person_id).await?;
        if removed {
            tracing::info!(film_id, person_id, "Like removed");
        } else {
            tracing::debug!(film_id, person_id, "No like to remove");
        }
        Ok(())
    }

    /// Identities of the people who like `film_id`, ascending.
    pub async fn likers(&self, film_id: DbId) -> CoreResult<Vec<DbId>> {
        self.ensure_film(film_id).await?;
        self.likes.likers_of(film_id).await
    }

    /// The `count` most-liked films: descending like count, ties by
    /// ascending id, films with zero likes included after all liked
    /// films. Recomputed freshly on every call.
    pub async fn popular(&self, count: i64) -> CoreResult<Vec<Film>> {
        if count < 0 {
            return Err(CoreError::InvalidArgument(
                "Popular film count must not be negative".into(),
            ));
        }

        let films = self.films.all().await?;
        let counts = self.likes.count_by_film().await?;
        let order = ranking::rank(films.iter().map(|f| f.id), &counts, count as usize);

        let mut by_id: std::collections::HashMap<DbId, Film> =
            films.into_iter().map(|f| (f.id, f)).collect();
        Ok(order.into_iter().filter_map(|id| by_id.remove(&id)).collect())
    }

    /// Resolve lookup references, deduplicating genres and ordering them
    /// by id. Fails with `NotFound` naming the first missing reference.
    async fn resolve_refs(
        &self,
        mpa_id: DbId,
        genre_ids: &[DbId],
    ) -> CoreResult<(MpaRating, Vec<Genre>)> {
        let mpa = self
            .lookup
            .mpa(mpa_id)
            .await?
            .ok_or(CoreError::not_found(EntityKind::Mpa, mpa_id))?;

        let mut ids = genre_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut genres = Vec::with_capacity(ids.len());
        for id in ids {
            let genre = self
                .lookup
                .genre(id)
                .await?
                .ok_or(CoreError::not_found(EntityKind::Genre, id))?;
            genres.push(genre);
        }
        Ok((mpa, genres))
    }

    async fn ensure_film(&self, id: DbId) -> CoreResult<()> {
        if self.films.exists(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(EntityKind::Film, id))
        }
    }

    async fn ensure_person(&self, id: DbId) -> CoreResult<()> {
        if self.people.exists(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(EntityKind::Person, id))
        }
    }
}
