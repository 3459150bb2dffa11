//! Film entity and its insertable counterpart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 80;
/// Maximum director length in characters.
pub const DIRECTOR_MAX_LEN: usize = 50;
/// Maximum genre length in characters.
pub const GENRE_MAX_LEN: usize = 60;

/// A stored film row.
///
/// Serializes field-for-field in declaration order:
/// `{"id", "title", "director", "genre", "year"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Film {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Unique title.
    pub title: String,
    pub director: String,
    pub genre: String,
    /// Release year. Stored as a float column.
    pub year: f64,
}

impl Film {
    /// Human-readable label, e.g. `"Inception - Nolan"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.director)
    }
}

/// A film that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilmValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} exceeds {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },
    #[error("year must be a finite number")]
    NonFiniteYear,
}

impl NewFilm {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        year: f64,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            year,
        }
    }

    /// Check required fields and column lengths before insert.
    ///
    /// The same limits are enforced by `CHECK` constraints in storage; this
    /// reports which field is wrong instead of a bare constraint failure.
    pub fn validate(&self) -> Result<(), FilmValidationError> {
        check_text("title", &self.title, TITLE_MAX_LEN)?;
        check_text("director", &self.director, DIRECTOR_MAX_LEN)?;
        check_text("genre", &self.genre, GENRE_MAX_LEN)?;
        if !self.year.is_finite() {
            return Err(FilmValidationError::NonFiniteYear);
        }
        Ok(())
    }
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), FilmValidationError> {
    if value.trim().is_empty() {
        return Err(FilmValidationError::Empty(field));
    }
    // Character count, matching SQLite's length() on TEXT.
    let len = value.chars().count();
    if len > max {
        return Err(FilmValidationError::TooLong { field, max, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Film {
        Film {
            id: 1,
            title: "Dune".to_string(),
            director: "Villeneuve".to_string(),
            genre: "Sci-Fi".to_string(),
            year: 2021.0,
        }
    }

    #[test]
    fn label_joins_title_and_director() {
        let film = Film {
            title: "Inception".to_string(),
            director: "Nolan".to_string(),
            ..dune()
        };
        assert_eq!(film.label(), "Inception - Nolan");
        assert_eq!(format!("{}", film), "Inception - Nolan");
    }

    #[test]
    fn serializes_every_field_verbatim() {
        let json = serde_json::to_string(&dune()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Dune","director":"Villeneuve","genre":"Sci-Fi","year":2021.0}"#
        );
    }

    #[test]
    fn serializes_sequence_as_ordered_array() {
        let second = Film {
            id: 2,
            title: "Arrival".to_string(),
            year: 2016.0,
            ..dune()
        };
        let value = serde_json::to_value(vec![dune(), second]).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["title"], "Dune");
        assert_eq!(arr[1]["title"], "Arrival");
        assert_eq!(arr[1]["year"], 2016.0);
    }

    #[test]
    fn validate_accepts_limits() {
        let film = NewFilm::new(
            "t".repeat(TITLE_MAX_LEN),
            "d".repeat(DIRECTOR_MAX_LEN),
            "g".repeat(GENRE_MAX_LEN),
            1999.0,
        );
        assert_eq!(film.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_long_title() {
        let film = NewFilm::new("t".repeat(TITLE_MAX_LEN + 1), "Nolan", "Drama", 2010.0);
        assert_eq!(
            film.validate(),
            Err(FilmValidationError::TooLong {
                field: "title",
                max: TITLE_MAX_LEN,
                len: TITLE_MAX_LEN + 1,
            })
        );
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // 50 two-byte characters fit the director column.
        let film = NewFilm::new("Amélie", "é".repeat(DIRECTOR_MAX_LEN), "Comedy", 2001.0);
        assert_eq!(film.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_genre() {
        let film = NewFilm::new("Heat", "Mann", "  ", 1995.0);
        assert_eq!(film.validate(), Err(FilmValidationError::Empty("genre")));
    }

    #[test]
    fn validate_rejects_nan_year() {
        let film = NewFilm::new("Heat", "Mann", "Crime", f64::NAN);
        assert_eq!(film.validate(), Err(FilmValidationError::NonFiniteYear));
    }
}
