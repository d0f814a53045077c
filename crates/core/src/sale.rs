//! Vehicle sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed vehicle sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub dealership: String,
    pub model: String,
    pub price: f64,
    pub sales_person: String,
    pub date: DateTime<Utc>,
    pub customer_name: String,
}

/// Sum of sale prices.
pub fn total_price<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> f64 {
    sales.into_iter().map(|s| s.price).sum()
}
