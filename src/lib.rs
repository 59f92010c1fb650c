//! Storefront Cache - read-through response caching for a storefront API
//!
//! Provides an in-memory TTL cache with pattern-based invalidation, an
//! axum middleware that serves idempotent reads from the cache, and the
//! write-side invalidation convention that keeps cached reads fresh.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_cleanup_task, CleanupTask};
