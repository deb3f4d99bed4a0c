//! Catalog REST API client.
//!
//! The catalog backend owns products, categories, banners, orders, and store
//! settings; this module fetches them as JSON and converts them to domain
//! types at the edge. Catalog reads are cached with `moka` (TTL from
//! configuration); order data is per-user and never cached.

mod cache;
mod conversions;
mod types;

use std::sync::Arc;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use sparkshop_core::{Banner, Category, Order, OrderId, Product, ProductId, StoreSettings};
use tracing::{debug, instrument};

use crate::config::CatalogApiConfig;

use cache::CacheValue;
use conversions::{
    convert_banner, convert_category, convert_order, convert_product, convert_settings,
};
use types::{WireBanner, WireCategory, WireOrder, WireProduct, WireSettings};

/// Errors from the catalog API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport or decode failure.
    #[error("catalog API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("catalog API returned HTTP {0} for {1}")]
    Status(u16, String),

    /// The requested resource does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog REST backend.
///
/// Cheaply cloneable; catalog reads are cached with the configured TTL.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        let endpoint = format!("{}/api", config.base_url.as_str().trim_end_matches('/'));

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint,
                api_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_owned()),
                cache,
            }),
        }
    }

    /// Execute a GET request and decode the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.endpoint);

        let mut request = self.inner.client.get(&url);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_owned()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                path,
                body = %body.chars().take(200).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(ApiError::Status(status.as_u16(), path.to_owned()));
        }

        Ok(response.json::<T>().await?)
    }

    // =========================================================================
    // Catalog Methods (cached)
    // =========================================================================

    /// Get the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get("products").await {
            debug!("cache hit for products");
            return Ok(products);
        }

        let wire: Vec<WireProduct> = self.fetch("/products").await?;
        let products: Vec<Product> = wire.into_iter().map(convert_product).collect();

        self.inner
            .cache
            .insert("products".to_owned(), CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for unknown IDs, or another error if
    /// the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok(*product);
        }

        let wire: WireProduct = self.fetch(&format!("/products/{id}")).await?;
        let product = convert_product(wire);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Get all categories, in the backend's display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get("categories").await {
            debug!("cache hit for categories");
            return Ok(categories);
        }

        let wire: Vec<WireCategory> = self.fetch("/categories").await?;
        let categories: Vec<Category> = wire.into_iter().map(convert_category).collect();

        self.inner
            .cache
            .insert(
                "categories".to_owned(),
                CacheValue::Categories(categories.clone()),
            )
            .await;
        Ok(categories)
    }

    /// Get the home screen banners.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_banners(&self) -> Result<Vec<Banner>, ApiError> {
        if let Some(CacheValue::Banners(banners)) = self.inner.cache.get("banners").await {
            debug!("cache hit for banners");
            return Ok(banners);
        }

        let wire: Vec<WireBanner> = self.fetch("/banners").await?;
        let banners: Vec<Banner> = wire.into_iter().map(convert_banner).collect();

        self.inner
            .cache
            .insert("banners".to_owned(), CacheValue::Banners(banners.clone()))
            .await;
        Ok(banners)
    }

    /// Get the store display settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> Result<StoreSettings, ApiError> {
        if let Some(CacheValue::Settings(settings)) = self.inner.cache.get("settings").await {
            debug!("cache hit for settings");
            return Ok(settings);
        }

        let wire: WireSettings = self.fetch("/settings").await?;
        let settings = convert_settings(wire);

        self.inner
            .cache
            .insert("settings".to_owned(), CacheValue::Settings(settings.clone()))
            .await;
        Ok(settings)
    }

    // =========================================================================
    // Order Methods (never cached - per-user data)
    // =========================================================================

    /// Get the order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        let wire: Vec<WireOrder> = self.fetch("/orders").await?;
        Ok(wire.into_iter().map(convert_order).collect())
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for unknown IDs, or another error if
    /// the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        let wire: WireOrder = self.fetch(&format!("/orders/{id}")).await?;
        Ok(convert_order(wire))
    }

    /// Check upstream reachability without touching the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let _: WireSettings = self.fetch("/settings").await?;
        Ok(())
    }
}
