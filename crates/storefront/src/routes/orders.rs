//! Order history handlers.
//!
//! Orders are immutable history: these handlers read and summarize, never
//! mutate. Reordering lives under the cart routes.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sparkshop_core::{Order, OrderItem, TimelineStep};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Order list entry with a compact timeline summary.
#[derive(Debug, Serialize)]
pub struct OrderSummaryView {
    pub id: String,
    pub placed_at: DateTime<Utc>,
    pub item_count: u32,
    /// Key of the first unfinished step, or `None` when fully delivered.
    pub current_step: Option<String>,
    pub steps_done: usize,
    pub steps_total: usize,
    pub complete: bool,
}

/// Full order detail.
#[derive(Debug, Serialize)]
pub struct OrderDetailView {
    pub id: String,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub steps: Vec<TimelineStep>,
    pub current_step: Option<String>,
    pub complete: bool,
}

fn summarize(order: &Order) -> OrderSummaryView {
    let (steps_done, steps_total) = order.progress();
    OrderSummaryView {
        id: order.id.to_string(),
        placed_at: order.placed_at,
        item_count: order.items.iter().map(|item| item.quantity).sum(),
        current_step: order.current_step().map(|step| step.key.clone()),
        steps_done,
        steps_total,
        complete: order.is_complete(),
    }
}

/// Order history, most recent first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderSummaryView>>> {
    let mut orders = state.catalog().get_orders().await?;
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
    Ok(Json(orders.iter().map(summarize).collect()))
}

/// Order detail with the full tracking timeline.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetailView>> {
    let order = state.catalog().get_order(&id.into()).await?;

    let current_step = order.current_step().map(|step| step.key.clone());
    let complete = order.is_complete();
    Ok(Json(OrderDetailView {
        id: order.id.to_string(),
        placed_at: order.placed_at,
        items: order.items,
        steps: order.steps,
        current_step,
        complete,
    }))
}
