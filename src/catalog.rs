//! Catalog Module
//!
//! In-memory product/category store standing in for the relational
//! persistence collaborator. It reproduces the read shapes the cached
//! endpoints serve (newest-first listing, lookup by id, capped
//! case-insensitive search, by-category filter) and the writes that
//! trigger invalidation, without any real database behind it.

use crate::models::{Category, Product, ProductInput};

/// Upper bound on search results, to keep responses bounded.
pub const SEARCH_LIMIT: usize = 50;

// == Catalog ==
/// In-memory catalog of products and categories.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    next_product_id: u64,
}

impl Catalog {
    // == Constructors ==
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            next_product_id: 1,
        }
    }

    /// Creates a catalog pre-populated with records, continuing id
    /// assignment after the highest existing product id.
    pub fn with_data(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let next_product_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            products,
            categories,
            next_product_id,
        }
    }

    // == Product Reads ==
    /// Returns all products, newest first.
    pub fn list_products(&self) -> Vec<Product> {
        let mut products = self.products.clone();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        products
    }

    /// Looks up a product by id.
    pub fn find_product(&self, id: u64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Case-insensitive substring search over name and description,
    /// capped at [`SEARCH_LIMIT`] results.
    pub fn search_products(&self, term: &str) -> Vec<Product> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Returns the products belonging to a category.
    pub fn products_in_category(&self, category_id: u64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect()
    }

    // == Product Writes ==
    /// Inserts a product, assigning the next id.
    pub fn insert_product(&mut self, input: ProductInput) -> Product {
        let product = Product {
            id: self.next_product_id,
            name: input.name,
            description: input.description,
            price: input.price,
            category_id: input.category_id,
        };
        self.next_product_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Replaces an existing product's fields, keeping its id.
    pub fn update_product(&mut self, id: u64, input: ProductInput) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.category_id = input.category_id;
        Some(product.clone())
    }

    /// Removes a product, reporting whether it existed.
    pub fn remove_product(&mut self, id: u64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() < before
    }

    // == Category Reads ==
    /// Returns all categories.
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// Looks up a category by id.
    pub fn find_category(&self, id: u64) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    // == Category Writes ==
    /// Removes a category and every product in it.
    ///
    /// The cascade is why deleting a category must invalidate both the
    /// category and product cache patterns.
    pub fn remove_category(&mut self, id: u64) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        let existed = self.categories.len() < before;
        if existed {
            self.products.retain(|p| p.category_id != id);
        }
        existed
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
