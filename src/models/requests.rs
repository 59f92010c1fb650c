//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating or replacing a product
///
/// # Fields
/// - `name`: Display name
/// - `description`: Free-text description, searched alongside the name
/// - `price`: Unit price
/// - `category_id`: Owning category
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Owning category
    pub category_id: u64,
}

impl ProductInput {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.price < 0.0 {
            return Some("Product price cannot be negative".to_string());
        }
        None
    }
}

/// Query string for product search (GET /products/search?q=)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Search term; missing or blank means an empty result set
    #[serde(default)]
    pub q: Option<String>,
}
