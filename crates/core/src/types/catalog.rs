//! Catalog entities: products, categories, and promotional banners.
//!
//! These are immutable reference data within a session. They arrive from the
//! catalog REST API already resolved; nothing in this crate fetches them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BannerId, CategoryId, ProductId};

/// A sellable product.
///
/// Fields the backend may omit are lenient: a missing price behaves as zero
/// everywhere it is compared or summed, and a missing name or description
/// behaves as the empty string. Keeping the absence visible (rather than
/// collapsing to `Decimal::ZERO` at the edge) lets callers distinguish
/// "free" from "unpriced" when displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price. `None` when the backend record has no price.
    pub price: Option<Decimal>,
    /// Owning category, if the product is categorized.
    pub category: Option<CategoryId>,
    /// Flagged by merchandising for the "best selling" rail.
    pub best_selling: bool,
    /// Image reference (URL or asset key), if any.
    pub image: Option<String>,
}

impl Product {
    /// The price used for comparisons and totals; missing price counts as 0.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: Option<String>,
}

/// A promotional banner shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub image: String,
    /// Optional deep link target (product or category).
    pub link: Option<String>,
}
