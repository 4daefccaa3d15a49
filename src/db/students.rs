//! Student repository

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{NewStudent, Student, StudentChanges};

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>("SELECT id, name, cohort_id FROM students ORDER BY id")
            .fetch_all(self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>("SELECT id, name, cohort_id FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
    }

    /// Insert a student and return its generated id.
    ///
    /// `cohort_id` is written only when set; otherwise the column stays NULL.
    pub async fn create(&self, student: &NewStudent) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO students (name, cohort_id) VALUES (?, ?)")
            .bind(&student.name)
            .bind(student.cohort_id)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Apply a partial update. Only the columns present in `changes` are
    /// written. An empty change set touches nothing and reports zero rows.
    pub async fn update(&self, id: i64, changes: &StudentChanges) -> Result<u64, sqlx::Error> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE students SET ");
        let mut columns = query.separated(", ");
        if let Some(name) = &changes.name {
            columns.push("name = ");
            columns.push_bind_unseparated(name.clone());
        }
        if let Some(cohort_id) = changes.cohort_id {
            columns.push("cohort_id = ");
            columns.push_bind_unseparated(cohort_id);
        }
        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
