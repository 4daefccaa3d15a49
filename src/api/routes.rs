//! API Routes
//!
//! Configures the Axum router with all cohort and student endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::cohorts::{
    create_cohort, delete_cohort, get_cohort, list_cohort_students, list_cohorts, update_cohort,
};
use super::handlers::{health_handler, AppState};
use super::students::{create_student, delete_student, get_student, list_students, update_student};

/// Creates the main router with all endpoints configured.
///
/// The store handle arrives through `state`; the router keeps nothing else
/// between requests.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cohorts", get(list_cohorts).post(create_cohort))
        .route(
            "/cohorts/:id",
            get(get_cohort).put(update_cohort).delete(delete_cohort),
        )
        .route("/cohorts/:id/students", get(list_cohort_students))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
