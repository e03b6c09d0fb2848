//! Film row mapping.
//!
//! Films join their MPA rating in one query; genres arrive from a second
//! query over the junction table and are attached during assembly.

use chrono::NaiveDate;
use sqlx::FromRow;

use filmgraph_core::model::film::Film;
use filmgraph_core::model::lookup::{self, Genre, MpaRating};
use filmgraph_core::types::DbId;

/// A row from `films` joined with `mpa_ratings`.
#[derive(Debug, Clone, FromRow)]
pub struct FilmRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: DbId,
    pub mpa_code: String,
}

impl FilmRow {
    /// Attach the genre list and produce the domain model. The MPA
    /// description is derived from the code, matching the seeded set.
    pub fn into_film(self, genres: Vec<Genre>) -> Film {
        Film {
            id: self.id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            mpa: MpaRating {
                id: self.mpa_id,
                description: lookup::mpa_description(&self.mpa_code).to_string(),
                code: self.mpa_code,
            },
            genres,
        }
    }
}

/// A row from `film_genres` joined with `genres`, used when loading the
/// genre lists for a batch of films.
#[derive(Debug, Clone, FromRow)]
pub struct FilmGenreRow {
    pub film_id: DbId,
    pub id: DbId,
    pub name: String,
}
