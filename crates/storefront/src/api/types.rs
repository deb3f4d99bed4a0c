//! Wire types for the catalog REST backend.
//!
//! The backend is a Mongoose-over-Express CRUD service, so documents carry
//! `_id` keys and fields can be absent on older records. Every field except
//! the ID is lenient: missing values decode to `None`/defaults and are
//! normalized in [`super::conversions`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub best_selling: bool,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireCategory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBanner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub placed_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<WireOrderItem>,
    #[serde(default)]
    pub steps: Vec<WireTimelineStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrderItem {
    pub product_id: String,
    /// Signed on the wire; negative values are clamped to zero during
    /// conversion rather than failing the whole order decode.
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireTimelineStep {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSettings {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub announcement: Option<String>,
}
