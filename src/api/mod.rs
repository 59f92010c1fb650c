//! API Module
//!
//! HTTP handlers, response-cache middleware, and routing for the
//! storefront REST API.
//!
//! # Endpoints
//! - `GET /products`, `POST /products`
//! - `GET /products/search?q=` - Search products
//! - `GET /products/:id`, `PUT /products/:id`, `DELETE /products/:id`
//! - `GET /categories`, `GET /categories/:id`, `DELETE /categories/:id`
//! - `GET /categories/:id/products` - Products in a category
//! - `GET /cache/stats` - Cache diagnostics
//! - `POST /cache/clear` - Administrative cache reset
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use middleware::{cache_response, CachePolicy};
pub use routes::create_router;
