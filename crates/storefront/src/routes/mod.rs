//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (probes the backend)
//!
//! # Home
//! GET  /home                        - Banners, categories, best-selling rail
//! GET  /settings                    - Store display settings
//!
//! # Catalog
//! GET  /products                    - Search/filter/sort pipeline
//! GET  /products/{id}               - Product detail
//! GET  /categories                  - Category list
//!
//! # Cart (session via X-Cart-Session header)
//! GET    /cart                      - Current cart
//! POST   /cart/items                - Add item (merges existing lines)
//! PATCH  /cart/items                - Set quantity (0 removes)
//! DELETE /cart/items/{product_id}   - Remove item
//! DELETE /cart                      - Clear cart
//! POST   /cart/reorder              - Merge a past order into the cart
//!
//! # Orders (read-only history)
//! GET  /orders                      - Order list
//! GET  /orders/{id}                 - Order detail with timeline
//! ```

pub mod cart;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/items", post(cart::add).patch(cart::update))
        .route("/items/{product_id}", delete(cart::remove))
        .route("/reorder", post(cart::reorder))
}

/// Create the main application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::show))
        .route("/settings", get(home::settings))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::detail))
        .route("/categories", get(products::categories))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::detail))
        .nest("/cart", cart_routes())
}
