//! Order history types.
//!
//! Orders are immutable history in this system: the storefront reads them to
//! display tracking timelines and to seed reorders, but never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};

/// A placed order with its item lines and tracking timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Ordered fulfillment steps, earliest first.
    pub steps: Vec<TimelineStep>,
}

/// One (product, quantity) line in a historical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// One step in an order's fulfillment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Stable machine key (e.g. "placed", "shipped").
    pub key: String,
    /// Human-readable label.
    pub label: String,
    pub done: bool,
    /// When the step completed, if it has.
    pub date: Option<DateTime<Utc>>,
}

impl Order {
    /// The first step that has not completed yet, or `None` when the whole
    /// timeline is done (the order is fully delivered).
    #[must_use]
    pub fn current_step(&self) -> Option<&TimelineStep> {
        self.steps.iter().find(|step| !step.done)
    }

    /// Number of completed steps out of the total.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let done = self.steps.iter().filter(|step| step.done).count();
        (done, self.steps.len())
    }

    /// Whether every timeline step has completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|step| step.done)
    }
}
