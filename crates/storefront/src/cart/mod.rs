//! Cart aggregate and per-session cart storage.
//!
//! A [`Cart`] holds at most one line per product: adding a product that is
//! already present merges into the existing line. Totals are always derived
//! from the lines on demand, never cached, so they cannot drift.
//!
//! Each cart is mutated by a single app session at a time (one phone, one
//! event loop), so the aggregate itself needs no locking; the [`CartStore`]
//! only coordinates which session owns which cart.

mod store;

use rust_decimal::Decimal;
use serde::Serialize;
use sparkshop_core::{Order, Product, ProductId};
use thiserror::Error;

pub use store::CartStore;

/// Cart mutation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A zero quantity was passed to `add_item`. Silently accepting it
    /// would corrupt totals, so it is signaled rather than clamped.
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
}

/// One (product, quantity) pair in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Totals derived from the current lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub item_count: u32,
}

/// Outcome of merging a historical order into the cart.
///
/// Catalog drift is normal: products get retired, so a reorder can partially
/// succeed. The counts let the app report "3 added, 1 no longer available".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReorderSummary {
    pub added: usize,
    pub skipped: usize,
}

/// The shopping cart for one app session.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product, merging into an existing line when present.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { product, quantity });
        }
        Ok(())
    }

    /// Remove a line by product ID. No-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    /// Set a line's quantity directly. Zero removes the line
    /// (delete-on-zero); setting a quantity for an absent product is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. Used after successful order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recompute totals from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self
            .lines
            .iter()
            .map(|line| line.product.effective_price() * Decimal::from(line.quantity))
            .sum();
        let item_count = self.lines.iter().map(|line| line.quantity).sum();
        CartTotals {
            subtotal,
            item_count,
        }
    }

    /// Merge a historical order into the cart.
    ///
    /// Each item is looked up against the current catalog; retired products
    /// (lookup misses) and degenerate zero-quantity history lines are
    /// skipped silently.
    pub fn reorder<F>(&mut self, order: &Order, lookup: F) -> ReorderSummary
    where
        F: Fn(&ProductId) -> Option<Product>,
    {
        let mut summary = ReorderSummary::default();
        for item in &order.items {
            match lookup(&item.product_id) {
                Some(product) if item.quantity > 0 => {
                    // add_item only rejects zero quantities, guarded above.
                    if self.add_item(product, item.quantity).is_ok() {
                        summary.added += 1;
                    }
                }
                _ => summary.skipped += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sparkshop_core::{OrderId, OrderItem};

    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Some(price.parse().expect("valid decimal")),
            category: None,
            best_selling: false,
            image: None,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 2).expect("add");
        cart.add_item(product("a", "50"), 3).expect("add");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(product("a", "50"), 0),
            Err(CartError::InvalidQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 1).expect("add");
        cart.remove_item(&ProductId::new("missing"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 2).expect("add");
        cart.update_quantity(&ProductId::new("a"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 2).expect("add");
        cart.update_quantity(&ProductId::new("a"), 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_totals_recomputed_from_lines() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 2).expect("add");
        cart.add_item(product("b", "19.99"), 1).expect("add");

        let totals = cart.totals();
        assert_eq!(totals.subtotal, dec("119.99"));
        assert_eq!(totals.item_count, 3);

        cart.remove_item(&ProductId::new("a"));
        let totals = cart.totals();
        assert_eq!(totals.subtotal, dec("19.99"));
        assert_eq!(totals.item_count, 1);
    }

    #[test]
    fn test_missing_price_counts_as_zero_in_subtotal() {
        let mut cart = Cart::new();
        let mut unpriced = product("a", "0");
        unpriced.price = None;
        cart.add_item(unpriced, 4).expect("add");
        cart.add_item(product("b", "10"), 1).expect("add");

        let totals = cart.totals();
        assert_eq!(totals.subtotal, dec("10"));
        assert_eq!(totals.item_count, 5);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "50"), 2).expect("add");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals().item_count, 0);
    }

    #[test]
    fn test_reorder_skips_retired_products() {
        let mut cart = Cart::new();
        let order = Order {
            id: OrderId::new("ord-1"),
            placed_at: Utc::now(),
            items: vec![
                OrderItem {
                    product_id: ProductId::new("alive"),
                    quantity: 2,
                },
                OrderItem {
                    product_id: ProductId::new("retired"),
                    quantity: 1,
                },
            ],
            steps: Vec::new(),
        };

        let summary = cart.reorder(&order, |id| {
            (id.as_str() == "alive").then(|| product("alive", "30"))
        });

        assert_eq!(summary, ReorderSummary { added: 1, skipped: 1 });
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_reorder_into_nonempty_cart_merges() {
        let mut cart = Cart::new();
        cart.add_item(product("a", "30"), 1).expect("add");

        let order = Order {
            id: OrderId::new("ord-1"),
            placed_at: Utc::now(),
            items: vec![OrderItem {
                product_id: ProductId::new("a"),
                quantity: 2,
            }],
            steps: Vec::new(),
        };

        let summary = cart.reorder(&order, |_| Some(product("a", "30")));
        assert_eq!(summary.added, 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_reorder_zero_quantity_history_line_is_skipped() {
        let mut cart = Cart::new();
        let order = Order {
            id: OrderId::new("ord-1"),
            placed_at: Utc::now(),
            items: vec![OrderItem {
                product_id: ProductId::new("a"),
                quantity: 0,
            }],
            steps: Vec::new(),
        };

        let summary = cart.reorder(&order, |_| Some(product("a", "30")));
        assert_eq!(summary, ReorderSummary { added: 0, skipped: 1 });
        assert!(cart.is_empty());
    }
}
