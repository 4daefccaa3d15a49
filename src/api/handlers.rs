//! Shared handler state and service-level endpoints.

use axum::Json;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::models::HealthResponse;

/// Application state shared across all handlers.
///
/// Holds the table store handle. The pool is reference counted, so cloning
/// the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    /// Creates a new AppState around an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to the configured database and makes sure both tables exist.
    pub async fn from_config(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = create_pool(&config.database_url, config.max_connections).await?;
        init_schema(&pool).await?;
        Ok(Self::new(pool))
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_from_config_in_memory() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };
        let state = AppState::from_config(&config).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cohorts")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
