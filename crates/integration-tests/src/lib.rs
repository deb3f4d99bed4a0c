//! Integration tests for Sparkshop.
//!
//! # Test Categories
//!
//! - `catalog_pipeline` - Search interpretation plus filter/sort, end to end
//! - `cart` - Cart aggregate invariants and reorder merging
//!
//! The tests exercise the storefront crate's public library API directly;
//! no network or running backend is required.

/// Build a product fixture for tests.
#[must_use]
pub fn product(
    id: &str,
    name: &str,
    price: Option<&str>,
    category: Option<&str>,
) -> sparkshop_core::Product {
    sparkshop_core::Product {
        id: sparkshop_core::ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: price.map(|p| p.parse().expect("valid decimal")),
        category: category.map(sparkshop_core::CategoryId::new),
        best_selling: false,
        image: None,
    }
}

/// Build a category fixture for tests.
#[must_use]
pub fn category(id: &str, name: &str) -> sparkshop_core::Category {
    sparkshop_core::Category {
        id: sparkshop_core::CategoryId::new(id),
        name: name.to_owned(),
        image: None,
    }
}
