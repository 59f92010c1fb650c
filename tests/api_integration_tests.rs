//! Integration Tests for API Endpoints
//!
//! Full request/response cycle through the router, exercising the
//! response-cache middleware, the invalidation policy on writes, and the
//! diagnostics surface.

use std::collections::HashSet;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use storefront_cache::api::{create_router, AppState};
use storefront_cache::cache::CacheStore;
use storefront_cache::catalog::Catalog;
use storefront_cache::config::Config;
use storefront_cache::models::{Category, Product, ProductInput};

// == Helper Functions ==

fn seeded_catalog() -> Catalog {
    let categories = vec![
        Category {
            id: 1,
            name: "Rings".to_string(),
        },
        Category {
            id: 2,
            name: "Necklaces".to_string(),
        },
    ];
    let products = vec![
        Product {
            id: 1,
            name: "Silver Ring".to_string(),
            description: "Plain band".to_string(),
            price: 49.0,
            category_id: 1,
        },
        Product {
            id: 2,
            name: "Gold Ring".to_string(),
            description: "Classic band".to_string(),
            price: 199.0,
            category_id: 1,
        },
        Product {
            id: 3,
            name: "Pearl Necklace".to_string(),
            description: "Freshwater pearls".to_string(),
            price: 120.0,
            category_id: 2,
        },
    ];
    Catalog::with_data(categories, products)
}

fn create_test_app() -> (Router, AppState) {
    let state = AppState::new(CacheStore::new(Duration::from_secs(300)), seeded_catalog());
    let app = create_router(state.clone(), Config::default().ttls);
    (app, state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn cached_keys(state: &AppState) -> HashSet<String> {
    let cache = state.cache.read().await;
    cache.stats().keys.into_iter().collect()
}

// == Health & Diagnostics ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_cache_stats_endpoint() {
    let (app, _) = create_test_app();

    // Warm two entries
    get(&app, "/products").await;
    get(&app, "/categories").await;

    let (status, json) = get(&app, "/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 2);
    let keys: HashSet<&str> = json["keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keys, HashSet::from(["products:all", "categories:all"]));
    assert!(json.get("hits").is_some());
    assert!(json.get("misses").is_some());
}

#[tokio::test]
async fn test_cache_clear_endpoint() {
    let (app, state) = create_test_app();

    get(&app, "/products").await;
    get(&app, "/categories").await;
    assert_eq!(cached_keys(&state).await.len(), 2);

    let (status, json) = send_json(&app, "POST", "/cache/clear", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cleared"], 2);

    assert!(cached_keys(&state).await.is_empty());
}

// == Read Caching ==

#[tokio::test]
async fn test_listing_served_from_cache_on_second_read() {
    let (app, state) = create_test_app();

    let (status, first) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first.as_array().unwrap().len(), 3);

    // Mutate the catalog behind the cache's back; a cached read must not
    // notice, proving the handler is skipped entirely on a hit.
    {
        let mut catalog = state.catalog.write().await;
        catalog.insert_product(ProductInput {
            name: "Bracelet".to_string(),
            description: String::new(),
            price: 15.0,
            category_id: 2,
        });
    }

    let (status, second) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first, "Second read must replay the cached payload");

    let cache = state.cache.read().await;
    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let (app, _) = create_test_app();

    let (_, json) = get(&app, "/products").await;
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_single_product_uses_domain_key() {
    let (app, state) = create_test_app();

    let (status, json) = get(&app, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Silver Ring");

    assert!(cached_keys(&state).await.contains("products:single:1"));
}

#[tokio::test]
async fn test_search_uses_normalized_key() {
    let (app, state) = create_test_app();

    let (status, json) = get(&app, "/products/search?q=Ring").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);

    assert!(cached_keys(&state).await.contains("products:search:ring"));
}

#[tokio::test]
async fn test_products_by_category() {
    let (app, state) = create_test_app();

    let (status, json) = get(&app, "/categories/1/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);

    assert!(cached_keys(&state).await.contains("products:category:1"));
}

#[tokio::test]
async fn test_error_responses_are_not_cached() {
    let (app, state) = create_test_app();

    let (status, json) = get(&app, "/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());

    assert!(
        !cached_keys(&state).await.contains("products:single:999"),
        "A 404 must never be stored"
    );
}

// == Write Invalidation ==

#[tokio::test]
async fn test_create_product_invalidates_product_reads() {
    let (app, state) = create_test_app();

    // Warm product and category reads
    get(&app, "/products").await;
    get(&app, "/products/1").await;
    get(&app, "/categories").await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Bracelet", "price": 15.0, "category_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    // Every products:* entry is gone; categories:* survives
    let keys = cached_keys(&state).await;
    assert!(!keys.contains("products:all"));
    assert!(!keys.contains("products:single:1"));
    assert!(keys.contains("categories:all"));

    // A read issued after the write response sees the new product
    let (_, listing) = get(&app, "/products").await;
    assert_eq!(listing.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_update_product_visible_after_write() {
    let (app, _) = create_test_app();

    // Warm the single-product read
    let (_, before) = get(&app, "/products/1").await;
    assert_eq!(before["name"], "Silver Ring");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/products/1",
        json!({"name": "Platinum Ring", "description": "Upgraded", "price": 299.0, "category_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = get(&app, "/products/1").await;
    assert_eq!(after["name"], "Platinum Ring");
}

#[tokio::test]
async fn test_delete_product_invalidates_and_404s() {
    let (app, _) = create_test_app();

    get(&app, "/products/2").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/products/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = get(&app, "/products/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_category_invalidates_both_resources() {
    let (app, state) = create_test_app();

    get(&app, "/products").await;
    get(&app, "/categories").await;
    get(&app, "/categories/1/products").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/categories/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The cascade touched both resources, so both patterns were dropped
    assert!(cached_keys(&state).await.is_empty());

    let (_, categories) = get(&app, "/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 1);

    let (_, products) = get(&app, "/products").await;
    assert_eq!(
        products.as_array().unwrap().len(),
        1,
        "Products in the deleted category are gone"
    );
}

#[tokio::test]
async fn test_mutations_are_never_cached() {
    let (app, state) = create_test_app();

    let (status, _) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Anklet", "price": 9.0, "category_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The POST went through the same route layer as the cached GET but
    // must leave nothing behind
    assert!(cached_keys(&state).await.is_empty());

    // And a second identical POST creates a second record
    let (status, second) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Anklet", "price": 9.0, "category_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], 5);
}

#[tokio::test]
async fn test_invalid_product_rejected() {
    let (app, _) = create_test_app();

    let (status, json) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "", "price": 9.0, "category_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == Expiry End To End ==

#[tokio::test]
async fn test_cached_read_expires_and_recomputes() {
    let catalog = seeded_catalog();
    let state = AppState::new(CacheStore::new(Duration::from_secs(300)), catalog);
    let mut ttls = Config::default().ttls;
    ttls.listing = Duration::from_millis(80);
    let app = create_router(state.clone(), ttls);

    let (_, first) = get(&app, "/products").await;
    assert_eq!(first.as_array().unwrap().len(), 3);

    // Grow the catalog directly; while the entry is live the read is stale
    {
        let mut catalog = state.catalog.write().await;
        catalog.insert_product(ProductInput {
            name: "Bracelet".to_string(),
            description: String::new(),
            price: 15.0,
            category_id: 2,
        });
    }
    let (_, cached) = get(&app, "/products").await;
    assert_eq!(cached.as_array().unwrap().len(), 3);

    tokio::time::sleep(Duration::from_millis(150)).await;

    // Past the TTL the handler runs again and sees the new record
    let (_, fresh) = get(&app, "/products").await;
    assert_eq!(fresh.as_array().unwrap().len(), 4);
}
