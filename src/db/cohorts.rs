//! Cohort repository
//!
//! One statement per operation; mutations report rows affected so the
//! caller can tell a missing row apart from a successful write.

use sqlx::SqlitePool;

use crate::models::{Cohort, CohortStudent};

/// Cohort repository
pub struct CohortRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CohortRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All cohorts in insertion order.
    pub async fn list(&self) -> Result<Vec<Cohort>, sqlx::Error> {
        sqlx::query_as::<_, Cohort>("SELECT id, name FROM cohorts ORDER BY id")
            .fetch_all(self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Cohort>, sqlx::Error> {
        sqlx::query_as::<_, Cohort>("SELECT id, name FROM cohorts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
    }

    /// Insert a cohort and return its generated id.
    pub async fn create(&self, name: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO cohorts (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE cohorts SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cohorts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Students enrolled in the cohort, projected with both names.
    pub async fn students(&self, id: i64) -> Result<Vec<CohortStudent>, sqlx::Error> {
        sqlx::query_as::<_, CohortStudent>(
            r#"
            SELECT
                students.id   AS id,
                students.name AS student_name,
                cohorts.name  AS cohort_name
            FROM cohorts
            INNER JOIN students ON students.cohort_id = cohorts.id
            WHERE cohorts.id = ?
            ORDER BY students.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await
    }
}
