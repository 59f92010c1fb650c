//! Cache Key Module
//!
//! Centralized key construction per resource.
//!
//! Every cached read is keyed `<resource>:<operation>[:<discriminator>]`
//! and every mutation invalidates `<resource>:*`. Building keys in one
//! place keeps a typo at a call site from silently missing invalidation.

use std::fmt;

// == Resource ==
/// The cacheable resource families of the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Categories,
    Users,
    Orders,
}

impl Resource {
    /// The key prefix for this resource.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Categories => "categories",
            Resource::Users => "users",
            Resource::Orders => "orders",
        }
    }

    // == Key Builders ==
    /// Key for the full listing, e.g. `products:all`.
    pub fn all(self) -> String {
        format!("{}:all", self.as_str())
    }

    /// Key for a single record, e.g. `products:single:42`.
    pub fn single(self, id: impl fmt::Display) -> String {
        format!("{}:single:{}", self.as_str(), id)
    }

    /// Key for a search, e.g. `products:search:ring`.
    ///
    /// The term is trimmed and lowercased so that `" Ring "` and `"ring"`
    /// share one entry.
    pub fn search(self, term: &str) -> String {
        format!("{}:search:{}", self.as_str(), term.trim().to_lowercase())
    }

    /// Key for a by-category listing, e.g. `products:category:7`.
    pub fn in_category(self, category_id: impl fmt::Display) -> String {
        format!("{}:category:{}", self.as_str(), category_id)
    }

    // == Invalidation Pattern ==
    /// The pattern covering every cached read of this resource.
    pub fn pattern(self) -> String {
        format!("{}:*", self.as_str())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
