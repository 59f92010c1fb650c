//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies. Domain records
//! (products, categories) serialize directly; the types here cover the
//! operational endpoints.

use serde::Serialize;

/// Response body for delete operations
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    /// Success message
    pub message: String,
}

impl DeletedResponse {
    /// Creates a new DeletedResponse
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            message: format!("{} deleted successfully", what.into()),
        }
    }
}

/// Response body for the administrative cache reset (POST /cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(cleared: usize) -> Self {
        Self {
            message: "Cache cleared".to_string(),
            cleared,
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
