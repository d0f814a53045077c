//! Inventory parts.

use serde::{Deserialize, Serialize};

/// A part held in warehouse inventory.
///
/// The demand fields are only present when the record came from the
/// prediction service; the built-in fallback list never carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_demand: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_reorder: Option<bool>,
}

impl Part {
    /// Whether the part should be reordered.
    ///
    /// Uses the service's flag when present, otherwise compares stock against
    /// the recommended level. Without either signal the answer is `false`.
    pub fn should_reorder(&self) -> bool {
        match (self.needs_reorder, self.recommended_stock) {
            (Some(flag), _) => flag,
            (None, Some(recommended)) => (self.quantity as f64) < recommended,
            (None, None) => false,
        }
    }

    /// Inventory value of this line (`quantity * price`).
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
