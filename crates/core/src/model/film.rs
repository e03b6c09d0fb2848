//! Film entity, DTOs, and field validators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::model::lookup::{Genre, MpaRating};
use crate::types::DbId;

/// Maximum length for a film description.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// No film can predate the first public screening (December 28, 1895).
pub fn min_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("constant date is valid")
}

/// A member of the film catalog. Carries exactly one MPA rating and a
/// duplicate-free, id-ordered genre list.
#[derive(Debug, Clone, Serialize)]
pub struct Film {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Duration in minutes, strictly positive.
    pub duration: i32,
    pub mpa: MpaRating,
    pub genres: Vec<Genre>,
}

/// A film record without an assigned identity. Produced by the service
/// layer after validation and reference resolution; consumed by storage.
#[derive(Debug, Clone)]
pub struct FilmDraft {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: MpaRating,
    pub genres: Vec<Genre>,
}

/// DTO for creating a film. References the lookup catalog by id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: DbId,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
}

/// DTO for updating a film. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub mpa_id: Option<DbId>,
    pub genre_ids: Option<Vec<DbId>>,
}

/// Validate the field-shape rules shared by create and update: non-blank
/// name, bounded description, release date not before the first public
/// screening, positive duration.
pub fn validate_film_fields(
    name: &str,
    description: Option<&str>,
    release_date: NaiveDate,
    duration: i32,
) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Film name must not be blank".into()));
    }
    if let Some(text) = description {
        if text.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(CoreError::Validation(format!(
                "Description must be at most {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
    }
    if release_date < min_release_date() {
        return Err(CoreError::Validation(
            "Release date must not be before December 28, 1895".into(),
        ));
    }
    if duration <= 0 {
        return Err(CoreError::Validation(
            "Duration must be a positive number of minutes".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_well_formed_fields() {
        assert!(validate_film_fields("Arrival", Some("First contact"), date(2016, 11, 11), 116).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate_film_fields("   ", None, date(2016, 11, 11), 116).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_overlong_description() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let err = validate_film_fields("Arrival", Some(&long), date(2016, 11, 11), 116).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn description_at_limit_is_accepted() {
        let exact = "x".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(validate_film_fields("Arrival", Some(&exact), date(2016, 11, 11), 116).is_ok());
    }

    #[test]
    fn rejects_release_before_first_screening() {
        let err = validate_film_fields("Old", None, date(1895, 12, 27), 10).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn first_screening_date_is_accepted() {
        assert!(validate_film_fields("Workers Leaving the Factory", None, date(1895, 12, 28), 1).is_ok());
    }

    #[test]
    fn rejects_non_positive_duration() {
        for bad in [0, -5] {
            let err = validate_film_fields("Arrival", None, date(2016, 11, 11), bad).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
    }
}
