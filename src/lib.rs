//! Cohort API - A small REST service for cohorts and students
//!
//! Thin HTTP layer over a SQLite table store with CRUD for both entities
//! and one join query.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::ApiError;
