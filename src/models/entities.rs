//! Row types for the `cohorts` and `students` tables.

use serde::Serialize;
use sqlx::FromRow;

/// A named grouping that students belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cohort {
    pub id: i64,
    pub name: String,
}

/// A person record, optionally attached to one cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub cohort_id: Option<i64>,
}

/// Projection returned by the cohort/students join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CohortStudent {
    /// The student's id
    pub id: i64,
    pub student_name: String,
    pub cohort_name: String,
}

/// Values for a student insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub cohort_id: Option<i64>,
}

/// Partial update for a student. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub cohort_id: Option<i64>,
}

impl StudentChanges {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cohort_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_null_cohort() {
        let student = Student {
            id: 3,
            name: "Ana".to_string(),
            cohort_id: None,
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json["cohort_id"].is_null());
    }

    #[test]
    fn test_student_changes_is_empty() {
        assert!(StudentChanges::default().is_empty());
        let changes = StudentChanges {
            name: None,
            cohort_id: Some(2),
        };
        assert!(!changes.is_empty());
    }
}
