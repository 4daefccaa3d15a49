//! Student Handlers
//!
//! HTTP request handlers for the `/students` resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::extractors::JsonBody;
use super::handlers::AppState;
use crate::db::StudentRepo;
use crate::error::{ApiError, Result};
use crate::models::requests::{NAME_OR_COHORT_REQUIRED, NAME_REQUIRED};
use crate::models::{CountResponse, CreatedResponse, Student, StudentRequest};

const NOT_FOUND: &str = "The student with specified ID cannot be found";
const NOT_FOUND_FOR_WRITE: &str = "The student with the specified ID cannot be found";

/// Handler for GET /students
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// Handler for POST /students
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let student = req
        .to_new_student()
        .ok_or_else(|| ApiError::InvalidRequest(NAME_REQUIRED.to_string()))?;

    let id = StudentRepo::new(&state.pool).create(&student).await?;
    info!(id, cohort_id = ?student.cohort_id, "student created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Student created successfully", id)),
    ))
}

/// Handler for GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>> {
    StudentRepo::new(&state.pool)
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
}

/// Handler for PUT /students/:id
///
/// Accepts `name` and/or `cohort_id`; only the supplied fields change.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<Json<CountResponse>> {
    let changes = req.to_changes();
    if changes.is_empty() {
        return Err(ApiError::InvalidRequest(NAME_OR_COHORT_REQUIRED.to_string()));
    }

    let count = StudentRepo::new(&state.pool).update(id, &changes).await?;
    if count == 0 {
        return Err(ApiError::NotFound(NOT_FOUND_FOR_WRITE.to_string()));
    }

    Ok(Json(CountResponse::updated(count)))
}

/// Handler for DELETE /students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CountResponse>> {
    let count = StudentRepo::new(&state.pool).delete(id).await?;
    if count == 0 {
        return Err(ApiError::NotFound(NOT_FOUND_FOR_WRITE.to_string()));
    }

    info!(id, "student deleted");
    Ok(Json(CountResponse::deleted(count)))
}
