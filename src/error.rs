//! Error types for the storefront cache service
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses are deliberately not represented here: a miss is an
//! ordinary outcome of `CacheStore::get`, and a cache problem must never
//! surface to an HTTP client as anything but a recomputed response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Empty or otherwise unusable cache key passed to `set`
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// Zero TTL passed to `set`
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested catalog record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::InvalidTtl(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, CacheError>;
