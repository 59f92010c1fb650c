//! Response Cache Middleware
//!
//! Transparently caches the JSON output of idempotent GET handlers. On a
//! hit the downstream handler never runs, which is the whole point: the
//! request is served without touching the catalog at all.

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{request::Parts, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{SharedCache, MAX_CACHEABLE_BODY_BYTES};

/// Computes an explicit domain cache key from the request head.
///
/// Domain keys (`products:all`, `products:single:42`) are preferred over
/// generic route keys because mutations can invalidate them by resource
/// pattern.
pub type KeyFn = fn(&Parts) -> String;

// == Cache Policy ==
/// Per-route caching configuration handed to the middleware as state.
#[derive(Clone)]
pub struct CachePolicy {
    cache: SharedCache,
    ttl: Duration,
    key_fn: Option<KeyFn>,
}

impl CachePolicy {
    /// Creates a policy using the generic route key.
    pub fn new(cache: SharedCache, ttl: Duration) -> Self {
        Self {
            cache,
            ttl,
            key_fn: None,
        }
    }

    /// Switches the policy to an explicit domain key.
    pub fn with_key(mut self, key_fn: KeyFn) -> Self {
        self.key_fn = Some(key_fn);
        self
    }
}

// == Cached Response ==
/// What actually goes into the store: the JSON body together with the
/// status it was originally served with, so a hit replays both.
#[derive(Debug, Serialize, Deserialize)]
struct CachedResponse {
    status: u16,
    body: Value,
}

impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self.body)).into_response()
    }
}

// == Middleware ==
/// Serves GET requests from the cache when possible, capturing misses.
///
/// Anything but GET passes straight through. On a miss the handler runs
/// and its output is stored only if it is a success with a JSON body no
/// larger than [`MAX_CACHEABLE_BODY_BYTES`]; error responses are never
/// cached. A failure to store degrades to a log line — caching is an
/// optimization and must never turn into an HTTP error.
pub async fn cache_response(
    State(policy): State<CachePolicy>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let key = match policy.key_fn {
        Some(key_fn) => key_fn(&parts),
        None => route_key(&parts),
    };
    let req = Request::from_parts(parts, body);

    let cached = policy.cache.write().await.get(&key);
    if let Some(value) = cached {
        match serde_json::from_value::<CachedResponse>(value) {
            Ok(hit) => {
                debug!(key = %key, "serving cached response");
                return hit.into_response();
            }
            Err(err) => {
                // A foreign payload under this key; fall through to the handler
                warn!(key = %key, error = %err, "discarding malformed cache entry");
                policy.cache.write().await.delete(&key);
            }
        }
    }

    let response = next.run(req).await;

    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.len() <= MAX_CACHEABLE_BODY_BYTES {
        if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
            let record = CachedResponse {
                status: parts.status.as_u16(),
                body: value,
            };
            match serde_json::to_value(record) {
                Ok(record) => {
                    let mut cache = policy.cache.write().await;
                    if let Err(err) = cache.set(key.clone(), record, Some(policy.ttl)) {
                        warn!(key = %key, error = %err, "failed to cache response");
                    }
                }
                Err(err) => warn!(key = %key, error = %err, "failed to encode cache record"),
            }
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Fallback key for routes without a domain key: method-independent
/// canonical form of path plus query, e.g. `route:/products?page=2`.
fn route_key(parts: &Parts) -> String {
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| parts.uri.path());
    format!("route:{}", path_and_query)
}
