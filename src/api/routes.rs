//! API Routes
//!
//! Configures the Axum router: storefront endpoints wrapped in per-route
//! cache policies, plus the diagnostics surface.

use axum::{
    http::request::Parts,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::cache::Resource;
use crate::config::CacheTtls;

use super::handlers::{
    cache_clear, cache_stats, create_product, delete_category, delete_product, get_category,
    get_product, health, list_categories, list_products, products_by_category, search_products,
    update_product, AppState,
};
use super::middleware::{cache_response, CachePolicy};

// == Domain Key Functions ==
// Each cached route gets a domain key so that write handlers can
// invalidate by resource pattern. The mutating methods on the same paths
// pass through the middleware untouched.

fn product_listing_key(_parts: &Parts) -> String {
    Resource::Products.all()
}

fn product_single_key(parts: &Parts) -> String {
    let id = parts.uri.path().rsplit('/').next().unwrap_or_default();
    Resource::Products.single(id)
}

fn product_search_key(parts: &Parts) -> String {
    let term = parts
        .uri
        .query()
        .and_then(|query| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("q="))
        })
        .unwrap_or_default();
    Resource::Products.search(term)
}

fn products_by_category_key(parts: &Parts) -> String {
    // Path shape: /categories/:id/products
    let id = parts
        .uri
        .path()
        .trim_matches('/')
        .split('/')
        .nth(1)
        .unwrap_or_default();
    Resource::Products.in_category(id)
}

fn category_listing_key(_parts: &Parts) -> String {
    Resource::Categories.all()
}

fn category_single_key(parts: &Parts) -> String {
    let id = parts.uri.path().rsplit('/').next().unwrap_or_default();
    Resource::Categories.single(id)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products`, `POST /products`
/// - `GET /products/search?q=`
/// - `GET /products/:id`, `PUT /products/:id`, `DELETE /products/:id`
/// - `GET /categories`
/// - `GET /categories/:id`, `DELETE /categories/:id`
/// - `GET /categories/:id/products`
/// - `GET /cache/stats`, `POST /cache/clear`, `GET /health`
///
/// # Middleware
/// - Response cache on every read route, with per-resource TTLs
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState, ttls: CacheTtls) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let product_listing = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.listing).with_key(product_listing_key),
            cache_response,
        ));

    let product_search = Router::new()
        .route("/products/search", get(search_products))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.search).with_key(product_search_key),
            cache_response,
        ));

    let product_single = Router::new()
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.single).with_key(product_single_key),
            cache_response,
        ));

    let category_listing = Router::new()
        .route("/categories", get(list_categories))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.listing).with_key(category_listing_key),
            cache_response,
        ));

    let category_single = Router::new()
        .route("/categories/:id", get(get_category).delete(delete_category))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.single).with_key(category_single_key),
            cache_response,
        ));

    let category_products = Router::new()
        .route("/categories/:id/products", get(products_by_category))
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), ttls.category).with_key(products_by_category_key),
            cache_response,
        ));

    let diagnostics = Router::new()
        .route("/cache/stats", get(cache_stats))
        .route("/cache/clear", post(cache_clear))
        .route("/health", get(health));

    Router::new()
        .merge(product_listing)
        .merge(product_search)
        .merge(product_single)
        .merge(category_listing)
        .merge(category_single)
        .merge(category_products)
        .merge(diagnostics)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
