//! Cohort Handlers
//!
//! HTTP request handlers for the `/cohorts` resource and its student join.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::extractors::JsonBody;
use super::handlers::AppState;
use crate::db::CohortRepo;
use crate::error::{ApiError, Result};
use crate::models::requests::{NAME_REQUIRED, NAME_REQUIRED_FOR_UPDATE};
use crate::models::{Cohort, CohortRequest, CohortStudent, CountResponse, CreatedResponse};

const NOT_FOUND: &str = "The cohort with specified ID cannot be found";
const NOT_FOUND_FOR_WRITE: &str = "The cohort with the specified ID cannot be found";

/// Handler for GET /cohorts
pub async fn list_cohorts(State(state): State<AppState>) -> Result<Json<Vec<Cohort>>> {
    let cohorts = CohortRepo::new(&state.pool).list().await?;
    Ok(Json(cohorts))
}

/// Handler for POST /cohorts
///
/// Responds 201 with the generated id.
pub async fn create_cohort(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CohortRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let name = req
        .name()
        .ok_or_else(|| ApiError::InvalidRequest(NAME_REQUIRED.to_string()))?;

    let id = CohortRepo::new(&state.pool).create(name).await?;
    info!(id, "cohort created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Cohort created successfully", id)),
    ))
}

/// Handler for GET /cohorts/:id
pub async fn get_cohort(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Cohort>> {
    CohortRepo::new(&state.pool)
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
}

/// Handler for PUT /cohorts/:id
pub async fn update_cohort(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<CohortRequest>,
) -> Result<Json<CountResponse>> {
    let name = req
        .name()
        .ok_or_else(|| ApiError::InvalidRequest(NAME_REQUIRED_FOR_UPDATE.to_string()))?;

    let count = CohortRepo::new(&state.pool).update(id, name).await?;
    if count == 0 {
        return Err(ApiError::NotFound(NOT_FOUND_FOR_WRITE.to_string()));
    }

    Ok(Json(CountResponse::updated(count)))
}

/// Handler for DELETE /cohorts/:id
///
/// Students that referenced the cohort are left as they are.
pub async fn delete_cohort(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CountResponse>> {
    let count = CohortRepo::new(&state.pool).delete(id).await?;
    if count == 0 {
        return Err(ApiError::NotFound(NOT_FOUND_FOR_WRITE.to_string()));
    }

    info!(id, "cohort deleted");
    Ok(Json(CountResponse::deleted(count)))
}

/// Handler for GET /cohorts/:id/students
///
/// 404 when the cohort does not exist; an existing cohort with no students
/// yields an empty array.
pub async fn list_cohort_students(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CohortStudent>>> {
    let repo = CohortRepo::new(&state.pool);
    if repo.get(id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND_FOR_WRITE.to_string()));
    }

    let students = repo.students(id).await?;
    debug!(id, count = students.len(), "cohort students fetched");
    Ok(Json(students))
}
