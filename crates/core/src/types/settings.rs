//! Store-level display settings.

use serde::{Deserialize, Serialize};

/// Display settings served by the backend's settings endpoint.
///
/// Purely informational: the storefront passes these through to the app
/// without interpreting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub store_name: String,
    /// ISO 4217 currency code used for display formatting.
    pub currency_code: String,
    pub support_phone: Option<String>,
    pub support_email: Option<String>,
    /// Free-form announcement shown on the home screen, if set.
    pub announcement: Option<String>,
}
