//! Catalog route handlers: the search/filter/sort pipeline and lookups.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sparkshop_core::{Category, Product, ProductId};
use tracing::instrument;

use crate::catalog::{CategoryFilter, SortMode, apply, interpret};
use crate::error::Result;
use crate::state::AppState;

/// Query parameters for the product listing.
///
/// All optional: the empty query with category "all" and default sort
/// returns the full catalog in backend order.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sort: String,
}

/// The filters that were actually applied, echoed back so the app can
/// highlight the active category chip and show the detected price ceiling.
#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub price_max: Option<Decimal>,
    pub category_id: Option<String>,
    pub residual_text: String,
    pub sort: &'static str,
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub applied: AppliedFilters,
    pub products: Vec<Product>,
}

/// Product listing: interpret the search text, then filter and sort.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProductListView>> {
    let products = state.catalog().get_products().await?;
    let categories = state.catalog().get_categories().await?;

    let intent = interpret(&params.q, &categories);
    let explicit = CategoryFilter::parse(&params.category);
    let sort = SortMode::parse(&params.sort);

    let filtered = apply(&products, &intent, &explicit, sort);

    Ok(Json(ProductListView {
        applied: AppliedFilters {
            price_max: intent.price_max,
            category_id: intent.category_id.map(String::from),
            residual_text: intent.residual_text,
            sort: sort.as_str(),
        },
        products: filtered,
    }))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.catalog().get_product(&ProductId::new(id)).await?;
    Ok(Json(product))
}

/// Category list, in the backend's display order.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.catalog().get_categories().await?;
    Ok(Json(categories))
}
