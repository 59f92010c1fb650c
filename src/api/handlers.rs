//! API Handlers
//!
//! HTTP request handlers for the storefront endpoints and the cache
//! diagnostics surface.
//!
//! Read handlers only talk to the catalog; caching happens in the
//! response-cache middleware wrapped around their routes. Write handlers
//! carry the invalidation policy: every mutation drops the affected
//! resource pattern from the cache before the response is returned, so a
//! read issued after a write response never sees pre-write data.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{CacheSnapshot, CacheStore, Resource, SharedCache};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    Category, ClearResponse, DeletedResponse, HealthResponse, Product, ProductInput, SearchQuery,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide cache store
    pub cache: SharedCache,
    /// Persistence collaborator (in-memory stand-in)
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Creates a new AppState from a store and a catalog.
    pub fn new(cache: CacheStore, catalog: Catalog) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Creates a new AppState from configuration, with an empty catalog.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.default_ttl), Catalog::new())
    }
}

// == Product Reads ==

/// Handler for GET /products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list_products())
}

/// Handler for GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>> {
    let catalog = state.catalog.read().await;
    catalog
        .find_product(id)
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("Product {}", id)))
}

/// Handler for GET /products/search?q=
///
/// A missing or blank term yields an empty list, not an error.
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let term = query.q.unwrap_or_default();
    let catalog = state.catalog.read().await;
    Json(catalog.search_products(&term))
}

/// Handler for GET /categories/:id/products
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<u64>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    Json(catalog.products_in_category(category_id))
}

// == Category Reads ==

/// Handler for GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list_categories())
}

/// Handler for GET /categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Category>> {
    let catalog = state.catalog.read().await;
    catalog
        .find_category(id)
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("Category {}", id)))
}

// == Product Writes ==

/// Handler for POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    if let Some(error_msg) = input.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let product = {
        let mut catalog = state.catalog.write().await;
        catalog.insert_product(input)
    };

    invalidate(&state.cache, Resource::Products).await;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = input.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let product = {
        let mut catalog = state.catalog.write().await;
        catalog
            .update_product(id, input)
            .ok_or_else(|| CacheError::NotFound(format!("Product {}", id)))?
    };

    invalidate(&state.cache, Resource::Products).await;

    Ok(Json(product))
}

/// Handler for DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeletedResponse>> {
    {
        let mut catalog = state.catalog.write().await;
        if !catalog.remove_product(id) {
            return Err(CacheError::NotFound(format!("Product {}", id)));
        }
    }

    invalidate(&state.cache, Resource::Products).await;

    Ok(Json(DeletedResponse::new(format!("Product {}", id))))
}

// == Category Writes ==

/// Handler for DELETE /categories/:id
///
/// Deleting a category cascades to its products, so both resource
/// patterns are invalidated. Invalidating one never touches the other.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeletedResponse>> {
    {
        let mut catalog = state.catalog.write().await;
        if !catalog.remove_category(id) {
            return Err(CacheError::NotFound(format!("Category {}", id)));
        }
    }

    invalidate(&state.cache, Resource::Categories).await;
    invalidate(&state.cache, Resource::Products).await;

    Ok(Json(DeletedResponse::new(format!("Category {}", id))))
}

/// Drops every cached read of a resource, synchronously, before the
/// calling write handler returns its response.
async fn invalidate(cache: &SharedCache, resource: Resource) {
    let removed = cache.write().await.delete_pattern(&resource.pattern());
    if removed > 0 {
        info!(resource = %resource, removed, "invalidated cached reads");
    }
}

// == Diagnostics ==

/// Handler for GET /cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheSnapshot> {
    let cache = state.cache.read().await;
    Json(cache.stats())
}

/// Handler for POST /cache/clear
pub async fn cache_clear(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
