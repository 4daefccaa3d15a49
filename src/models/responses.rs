//! Response DTOs for the cohort API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for a successful insert (201)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Success message
    pub message: String,
    /// Identifier generated by the store
    pub id: i64,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// Response body for a successful update or delete
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    /// Success message
    pub message: String,
    /// Number of rows affected
    pub count: u64,
}

impl CountResponse {
    pub fn updated(count: u64) -> Self {
        Self {
            message: "Record updated successfully".to_string(),
            count,
        }
    }

    pub fn deleted(count: u64) -> Self {
        Self {
            message: "Record deleted successfully".to_string(),
            count,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for 4xx and 5xx conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_serialize() {
        let resp = CreatedResponse::new("Cohort created successfully", 1);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["message"], "Cohort created successfully");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_count_response_messages() {
        assert_eq!(CountResponse::updated(1).message, "Record updated successfully");
        assert_eq!(CountResponse::deleted(2).count, 2);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_value(ErrorResponse::new("Something went wrong")).unwrap();
        assert_eq!(json["message"], "Something went wrong");
    }
}
