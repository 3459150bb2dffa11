//! Database migrations and initialization.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Open (creating if needed) the SQLite database at `db_path` and apply the schema.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!(path = %db_path, "database ready");
    Ok(pool)
}

/// Apply `schema.sql`. Every statement is `IF NOT EXISTS`, so reruns are no-ops.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let schema_sql = include_str!("schema.sql");

    let mut applied = 0usize;
    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
            applied += 1;
        }
    }

    debug!(statements = applied, "schema applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_db_path(temp_dir: &TempDir) -> String {
        temp_dir
            .path()
            .join("films.db")
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_init_db_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_db_path(&temp_dir);

        let _pool = init_db(&db_path).await.expect("init_db failed");
        assert!(Path::new(&db_path).exists());
    }

    #[tokio::test]
    async fn test_init_db_creates_missing_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("nested")
            .join("films.db")
            .to_string_lossy()
            .to_string();

        init_db(&db_path).await.expect("init_db failed");
        assert!(Path::new(&db_path).exists());
    }

    #[tokio::test]
    async fn test_films_table_has_schema_columns() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir)).await.unwrap();

        let columns: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info('films')")
            .fetch_all(&pool)
            .await
            .expect("query failed");
        let names: Vec<&str> = columns.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(names, vec!["id", "title", "director", "genre", "year"]);
    }

    #[tokio::test]
    async fn test_migrations_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir)).await.unwrap();

        run_migrations(&pool)
            .await
            .expect("second migration run failed");

        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='films'")
                .fetch_one(&pool)
                .await
                .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_pragmas_configured() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir)).await.unwrap();

        let result: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        // WAL can silently fall back on some filesystems.
        assert!(
            matches!(result.0.as_str(), "wal" | "delete"),
            "unexpected journal_mode: {}",
            result.0
        );
    }
}
