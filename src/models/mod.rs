//! Domain records and request/response models for the storefront API
//!
//! This module defines the catalog record types and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

use serde::{Deserialize, Serialize};

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ProductInput, SearchQuery};
pub use responses::{ClearResponse, DeletedResponse, ErrorResponse, HealthResponse};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: u64,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
