//! Genre and MPA rating reference records.
//!
//! Both sets are closed and read-only from the core's perspective. The
//! in-memory backend seeds them from the constants below; the Postgres
//! backend seeds the same rows via migration.

use serde::Serialize;

use crate::types::DbId;

/// A film genre reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// An MPA age rating reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MpaRating {
    pub id: DbId,
    pub code: String,
    pub description: String,
}

/// The closed genre set, in id order.
pub const GENRE_SEED: &[(DbId, &str)] = &[
    (1, "Comedy"),
    (2, "Drama"),
    (3, "Cartoon"),
    (4, "Thriller"),
    (5, "Documentary"),
    (6, "Action"),
];

/// The closed MPA rating set, in id order.
pub const MPA_SEED: &[(DbId, &str)] = &[
    (1, "G"),
    (2, "PG"),
    (3, "PG-13"),
    (4, "R"),
    (5, "NC-17"),
];

/// Human-readable description for an MPA code. Unknown codes map to an
/// empty description rather than an error; the set is closed upstream.
pub fn mpa_description(code: &str) -> &'static str {
    match code {
        "G" => "General audiences, no age restrictions",
        "PG" => "Parental guidance suggested",
        "PG-13" => "Parents strongly cautioned, not recommended under 13",
        "R" => "Restricted, under 17 requires an accompanying adult",
        "NC-17" => "Adults only, no one 17 and under admitted",
        _ => "",
    }
}

/// Materialize the seeded genre records.
pub fn seed_genres() -> Vec<Genre> {
    GENRE_SEED
        .iter()
        .map(|&(id, name)| Genre {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Materialize the seeded MPA rating records.
pub fn seed_mpa_ratings() -> Vec<MpaRating> {
    MPA_SEED
        .iter()
        .map(|&(id, code)| MpaRating {
            id,
            code: code.to_string(),
            description: mpa_description(code).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_id_ordered_and_complete() {
        let genres = seed_genres();
        assert_eq!(genres.len(), 6);
        assert!(genres.windows(2).all(|w| w[0].id < w[1].id));

        let ratings = seed_mpa_ratings();
        assert_eq!(ratings.len(), 5);
        assert!(ratings.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn every_seeded_code_has_a_description() {
        for rating in seed_mpa_ratings() {
            assert!(!rating.description.is_empty(), "{}", rating.code);
        }
    }
}
