//! Repository layer for the `films` table.

use crate::domain::{Film, NewFilm};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Fetch every film, ordered by id ascending.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored row does not decode
    /// into a `Film` (e.g. text written to `year` by external tooling).
    pub async fn list_films(&self) -> Result<Vec<Film>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, director, genre, year
            FROM films
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(film_from_row).collect()
    }

    /// Insert a single film and return its id.
    ///
    /// # Errors
    /// Fails with a database error on a duplicate title or a column
    /// exceeding its length limit.
    pub async fn insert_film(&self, film: &NewFilm) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO films (title, director, genre, year)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&film.title)
        .bind(&film.director)
        .bind(&film.genre)
        .bind(film.year)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert films in one transaction, skipping titles that already exist.
    ///
    /// Returns the number of newly inserted films.
    ///
    /// # Errors
    /// Returns an error if the transaction fails; nothing is committed then.
    pub async fn insert_films_if_absent(&self, films: &[NewFilm]) -> Result<usize, sqlx::Error> {
        if films.is_empty() {
            return Ok(0);
        }

        let mut total_inserted = 0usize;
        let mut tx = self.pool.begin().await?;

        for film in films {
            let result = sqlx::query(
                r#"
                INSERT INTO films (title, director, genre, year)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(title) DO NOTHING
                "#,
            )
            .bind(&film.title)
            .bind(&film.director)
            .bind(&film.genre)
            .bind(film.year)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() > 0 {
                total_inserted += 1;
            }
        }

        tx.commit().await?;
        Ok(total_inserted)
    }

    /// Number of stored films.
    pub async fn count_films(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM films")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Round-trip a trivial query to confirm the pool can serve requests.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn film_from_row(row: &SqliteRow) -> Result<Film, sqlx::Error> {
    Ok(Film {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        director: row.try_get("director")?,
        genre: row.try_get("genre")?,
        year: row.try_get("year")?,
    })
}
