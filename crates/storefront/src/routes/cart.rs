//! Cart route handlers.
//!
//! The cart is session-scoped: the app sends its session UUID in the
//! `X-Cart-Session` header and every response echoes it back. A missing or
//! unparseable header silently starts a fresh session, so first launch and
//! expired sessions behave the same.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sparkshop_core::{OrderId, Product, ProductId};
use tracing::instrument;
use uuid::Uuid;

use crate::cart::{Cart, CartLine, ReorderSummary};
use crate::error::Result;
use crate::state::AppState;

/// Session header carrying the cart's UUID.
const SESSION_HEADER: &str = "x-cart-session";

/// Cart line display data.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<String>,
}

/// Cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

/// Standard cart response: the session UUID plus the cart contents.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub session: Uuid,
    #[serde(flatten)]
    pub cart: CartView,
}

/// Reorder response: the merged cart plus the partial-success counts.
#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub session: Uuid,
    pub added: usize,
    pub skipped: usize,
    #[serde(flatten)]
    pub cart: CartView,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a decimal amount as a display price string.
fn format_price(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let price = line.product.effective_price();
        Self {
            product_id: line.product.id.to_string(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            price: format_price(price),
            line_price: format_price(price * Decimal::from(line.quantity)),
            image: line.product.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_price(totals.subtotal),
            item_count: totals.item_count,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Read the session UUID from the request headers, or start a new session.
fn session_from_headers(headers: &HeaderMap) -> Uuid {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4)
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Add to cart request.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update quantity request. A quantity of 0 removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Reorder request.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub order_id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart contents.
#[instrument(skip(state, headers))]
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<CartResponse>> {
    let session = session_from_headers(&headers);
    let cart = state.carts().get(session).await;
    Ok(Json(CartResponse {
        session,
        cart: CartView::from(&cart),
    }))
}

/// Add an item, merging into an existing line for the same product.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AddItemRequest>,
) -> Result<Json<CartResponse>> {
    let session = session_from_headers(&headers);
    let product = state
        .catalog()
        .get_product(&ProductId::new(body.product_id))
        .await?;

    let quantity = body.quantity.unwrap_or(1);
    let cart = state
        .carts()
        .with_cart(session, |cart| {
            cart.add_item(product, quantity)?;
            Ok::<_, crate::cart::CartError>(cart.clone())
        })
        .await?;

    Ok(Json(CartResponse {
        session,
        cart: CartView::from(&cart),
    }))
}

/// Set a line's quantity directly; 0 removes the line.
#[instrument(skip(state, headers))]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<CartResponse>> {
    let session = session_from_headers(&headers);
    let product_id = ProductId::new(body.product_id);

    let cart = state
        .carts()
        .with_cart(session, |cart| {
            cart.update_quantity(&product_id, body.quantity);
            cart.clone()
        })
        .await;

    Ok(Json(CartResponse {
        session,
        cart: CartView::from(&cart),
    }))
}

/// Remove a line; a no-op when the product is not in the cart.
#[instrument(skip(state, headers))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<Json<CartResponse>> {
    let session = session_from_headers(&headers);
    let product_id = ProductId::new(product_id);

    let cart = state
        .carts()
        .with_cart(session, |cart| {
            cart.remove_item(&product_id);
            cart.clone()
        })
        .await;

    Ok(Json(CartResponse {
        session,
        cart: CartView::from(&cart),
    }))
}

/// Empty the cart (e.g. after successful order placement).
#[instrument(skip(state, headers))]
pub async fn clear(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CartResponse>> {
    let session = session_from_headers(&headers);
    state.carts().remove(session).await;

    Ok(Json(CartResponse {
        session,
        cart: CartView::from(&Cart::new()),
    }))
}

/// Merge a historical order into the cart.
///
/// Products that have since been retired are skipped; the response reports
/// how many lines were added and how many were skipped.
#[instrument(skip(state, headers))]
pub async fn reorder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<ReorderResponse>> {
    let session = session_from_headers(&headers);
    let order = state.catalog().get_order(&OrderId::new(body.order_id)).await?;

    // Resolve the historical product IDs against the current catalog once.
    let products = state.catalog().get_products().await?;
    let lookup: HashMap<ProductId, Product> = products
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect();

    let (summary, cart): (ReorderSummary, Cart) = state
        .carts()
        .with_cart(session, |cart| {
            let summary = cart.reorder(&order, |id| lookup.get(id).cloned());
            (summary, cart.clone())
        })
        .await;

    Ok(Json(ReorderResponse {
        session,
        added: summary.added,
        skipped: summary.skipped,
        cart: CartView::from(&cart),
    }))
}
