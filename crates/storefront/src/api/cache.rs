//! Cache value types for catalog API responses.

use sparkshop_core::{Banner, Category, Product, StoreSettings};

/// Cached response payloads, keyed by string cache keys
/// (`"products"`, `"product:{id}"`, ...). Order data is never cached.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
    Categories(Vec<Category>),
    Banners(Vec<Banner>),
    Settings(StoreSettings),
}
