//! Company-wide analytics.

use serde::{Deserialize, Serialize};

/// Year-to-date and projected figures for one dealership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealershipMetrics {
    pub name: String,
    pub location: String,
    #[serde(rename = "salesYTD")]
    pub sales_ytd: f64,
    pub sales_projected: f64,
    #[serde(rename = "partsCostYTD")]
    pub parts_cost_ytd: f64,
    pub parts_cost_projected: f64,
}

/// Sales total for one month (`"Jan"` .. `"Dec"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub amount: f64,
}

/// Aggregate analytics snapshot for the executive dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(rename = "totalSalesYTD")]
    pub total_sales_ytd: f64,
    pub total_sales_projected: f64,
    #[serde(rename = "totalPartsCostYTD")]
    pub total_parts_cost_ytd: f64,
    pub total_parts_cost_projected: f64,
    pub dealerships: Vec<DealershipMetrics>,
    pub monthly_sales: Vec<MonthlySales>,
}

impl AnalyticsData {
    /// Largest monthly amount, or `0.0` when there are no points.
    pub fn peak_month_amount(&self) -> f64 {
        self.monthly_sales
            .iter()
            .map(|m| m.amount)
            .fold(0.0, f64::max)
    }
}
