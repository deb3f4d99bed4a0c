//! Home screen and settings handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use sparkshop_core::{Banner, Category, Product, StoreSettings};
use tracing::instrument;

use crate::catalog::best_selling;
use crate::error::Result;
use crate::state::AppState;

/// Everything the home screen needs in one round trip.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub banners: Vec<Banner>,
    pub categories: Vec<Category>,
    pub best_selling: Vec<Product>,
}

/// Home screen payload: banners, categories, and the best-selling rail.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<HomeView>> {
    let banners = state.catalog().get_banners().await?;
    let categories = state.catalog().get_categories().await?;
    let products = state.catalog().get_products().await?;

    Ok(Json(HomeView {
        banners,
        categories,
        best_selling: best_selling(&products),
    }))
}

/// Store display settings passthrough.
#[instrument(skip(state))]
pub async fn settings(State(state): State<AppState>) -> Result<Json<StoreSettings>> {
    let settings = state.catalog().get_settings().await?;
    Ok(Json(settings))
}
