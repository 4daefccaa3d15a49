//! Data models for the cohort API
//!
//! Row types read from the table store plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Cohort, CohortStudent, NewStudent, Student, StudentChanges};
pub use requests::{CohortRequest, StudentRequest};
pub use responses::{CountResponse, CreatedResponse, ErrorResponse, HealthResponse};
