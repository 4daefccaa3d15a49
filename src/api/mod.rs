//! API Module
//!
//! HTTP handlers and routing for the cohort REST API.
//!
//! # Endpoints
//! - `GET|POST /cohorts`
//! - `GET|PUT|DELETE /cohorts/:id`
//! - `GET /cohorts/:id/students`
//! - `GET|POST /students`
//! - `GET|PUT|DELETE /students/:id`
//! - `GET /health`

pub mod cohorts;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod students;

pub use handlers::*;
pub use routes::create_router;
