//! Request DTOs for the cohort API
//!
//! Defines the structure of incoming HTTP request bodies. Every field is
//! optional at the serde level so that a missing field surfaces as a 400
//! with a descriptive message rather than a deserialization rejection.

use serde::Deserialize;

use crate::models::{NewStudent, StudentChanges};

/// Message for a cohort or student insert without a name.
pub const NAME_REQUIRED: &str = "You need to provide a name";
/// Message for a cohort update without a name.
pub const NAME_REQUIRED_FOR_UPDATE: &str = "You need to provide a name to update";
/// Message for a student update with nothing to change.
pub const NAME_OR_COHORT_REQUIRED: &str = "You need to provide a name or cohort_id to update";

/// Request body for POST /cohorts and PUT /cohorts/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CohortRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CohortRequest {
    /// Returns the name when present and non-empty.
    pub fn name(&self) -> Option<&str> {
        present(self.name.as_deref())
    }
}

/// Request body for POST /students and PUT /students/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cohort_id: Option<i64>,
}

impl StudentRequest {
    /// Builds the insert row, or `None` when the name is missing.
    ///
    /// A zero `cohort_id` is treated the same as an absent one.
    pub fn to_new_student(&self) -> Option<NewStudent> {
        let name = present(self.name.as_deref())?;
        Some(NewStudent {
            name: name.to_string(),
            cohort_id: self.cohort_id.filter(|id| *id != 0),
        })
    }

    /// Collects the supplied fields into a partial update.
    pub fn to_changes(&self) -> StudentChanges {
        StudentChanges {
            name: present(self.name.as_deref()).map(str::to_string),
            cohort_id: self.cohort_id.filter(|id| *id != 0),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
