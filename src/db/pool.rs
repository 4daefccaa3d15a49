//! Database connection pool management
//!
//! Uses a sqlx `SqlitePool` with explicit connection limits.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::debug;

/// Create a SQLite connection pool.
///
/// The database file is created when missing. Foreign keys are not
/// enforced: a student may name a cohort that does not exist, and deleting
/// a cohort leaves its students in place.
///
/// In-memory databases live only as long as one of their connections, so
/// for `:memory:` and `mode=memory` URLs the pool holds exactly one connection that never
/// idles out.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite::memory:", 1).await?;
/// ```
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let in_memory = is_in_memory(database_url);
    let mut pool = SqlitePoolOptions::new();
    if in_memory {
        pool = pool
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        pool = pool.max_connections(max_connections);
    }

    debug!(database_url, in_memory, "connecting to table store");
    pool.connect_with(options).await
}

/// True for URLs naming an in-memory database, either the `:memory:`
/// shorthand or a `file:` URI with `mode=memory`.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:")
        || database_url
            .split_once('?')
            .is_some_and(|(_, query)| query.split('&').any(|param| param == "mode=memory"))
}

/// Create the `cohorts` and `students` tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cohorts (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            cohort_id INTEGER REFERENCES cohorts(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_acquires_connection() {
        let pool = create_pool("sqlite::memory:", 5).await.unwrap();

        let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('cohorts', 'students') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(
            tables,
            vec![("cohorts".to_string(),), ("students".to_string(),)]
        );
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:cohorts?mode=memory&cache=shared"));
        assert!(is_in_memory("sqlite://shared.db?cache=shared&mode=memory"));
        assert!(!is_in_memory("sqlite://cohorts.db"));
        assert!(!is_in_memory("sqlite://cohorts.db?mode=rwc"));
    }

    #[tokio::test]
    async fn mode_memory_url_shares_one_database() {
        let pool = create_pool("sqlite:file:pool_mode_test?mode=memory&cache=shared", 5)
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO cohorts (name) VALUES ('A')")
            .execute(&pool)
            .await
            .unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cohorts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        assert!(create_pool("postgres://nope", 1).await.is_err());
    }
}
