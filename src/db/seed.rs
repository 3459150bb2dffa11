//! Startup seeding from a JSON file.
//!
//! The HTTP API never writes. Catalog maintenance happens outside the
//! service; this loader lets a deployment ship an initial catalog as a JSON
//! array of `{title, director, genre, year}` objects.

use crate::db::Repository;
use crate::domain::{FilmValidationError, NewFilm};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid film at index {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: FilmValidationError,
    },
    #[error("Database error while seeding: {0}")]
    Db(#[from] sqlx::Error),
}

/// Parse and validate a JSON seed document.
///
/// Every entry is validated before anything is returned, so a bad entry
/// rejects the whole document.
pub fn parse_seed(json: &str) -> Result<Vec<NewFilm>, SeedError> {
    let films: Vec<NewFilm> = serde_json::from_str(json)?;
    for (index, film) in films.iter().enumerate() {
        film.validate()
            .map_err(|source| SeedError::Invalid { index, source })?;
    }
    Ok(films)
}

/// Load `path` and insert its films, skipping titles already stored.
///
/// Returns the number of newly inserted films.
pub async fn seed_from_file(repo: &Repository, path: &Path) -> Result<usize, SeedError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let films = parse_seed(&json)?;
    let inserted = repo.insert_films_if_absent(&films).await?;

    info!(
        path = %path.display(),
        total = films.len(),
        inserted,
        "seeded film catalog"
    );
    Ok(inserted)
}
