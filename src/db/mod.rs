//! Table Store Module
//!
//! Connection pool setup, schema bootstrap and the per-table repositories.
//! All SQL lives here; handlers only see typed rows and counts.

mod cohorts;
mod pool;
mod students;

pub use cohorts::CohortRepo;
pub use pool::{create_pool, init_schema};
pub use students::StudentRepo;
