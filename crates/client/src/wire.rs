//! Response shapes returned by the service, and their mapping into domain
//! records.
//!
//! Dates arrive as strings and enumerations as free-form strings; both are
//! validated here so a bad record fails the whole fetch instead of leaking
//! half-typed data.

use ecorp_core::{
    AnalyticsData, DealershipMetrics, DomainError, MonthlySales, Order, OrderLine, Part, Sale,
    ServiceTicket, parse_service_date,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub models_loaded: bool,
}

impl HealthResponse {
    /// Service is up and its models are loaded.
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.models_loaded
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealershipResponse {
    pub name: String,
    pub location: String,
    #[serde(rename = "salesYTD")]
    pub sales_ytd: f64,
    pub sales_projected: f64,
    #[serde(rename = "partsCostYTD")]
    pub parts_cost_ytd: f64,
    pub parts_cost_projected: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlySalesResponse {
    pub month: String,
    pub amount: f64,
}

/// `GET /api/analytics`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    #[serde(rename = "totalSalesYTD")]
    pub total_sales_ytd: f64,
    pub total_sales_projected: f64,
    #[serde(rename = "totalPartsCostYTD")]
    pub total_parts_cost_ytd: f64,
    pub total_parts_cost_projected: f64,
    pub dealerships: Vec<DealershipResponse>,
    pub monthly_sales: Vec<MonthlySalesResponse>,
}

impl From<AnalyticsResponse> for AnalyticsData {
    fn from(raw: AnalyticsResponse) -> Self {
        AnalyticsData {
            total_sales_ytd: raw.total_sales_ytd,
            total_sales_projected: raw.total_sales_projected,
            total_parts_cost_ytd: raw.total_parts_cost_ytd,
            total_parts_cost_projected: raw.total_parts_cost_projected,
            dealerships: raw
                .dealerships
                .into_iter()
                .map(|d| DealershipMetrics {
                    name: d.name,
                    location: d.location,
                    sales_ytd: d.sales_ytd,
                    sales_projected: d.sales_projected,
                    parts_cost_ytd: d.parts_cost_ytd,
                    parts_cost_projected: d.parts_cost_projected,
                })
                .collect(),
            monthly_sales: raw
                .monthly_sales
                .into_iter()
                .map(|m| MonthlySales {
                    month: m.month,
                    amount: m.amount,
                })
                .collect(),
        }
    }
}

/// One element of `GET /api/sales`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: String,
    pub dealership: String,
    pub model: String,
    pub price: f64,
    pub sales_person: String,
    pub date: String,
    pub customer_name: String,
}

impl TryFrom<SaleResponse> for Sale {
    type Error = DomainError;

    fn try_from(raw: SaleResponse) -> Result<Self, Self::Error> {
        Ok(Sale {
            date: parse_service_date(&raw.date)?,
            id: raw.id,
            dealership: raw.dealership,
            model: raw.model,
            price: raw.price,
            sales_person: raw.sales_person,
            customer_name: raw.customer_name,
        })
    }
}

/// One element of `GET /api/parts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub predicted_demand: Option<f64>,
    #[serde(default)]
    pub recommended_stock: Option<f64>,
    #[serde(default)]
    pub needs_reorder: Option<bool>,
}

impl From<PartResponse> for Part {
    fn from(raw: PartResponse) -> Self {
        Part {
            id: raw.id,
            name: raw.name,
            sku: raw.sku,
            quantity: raw.quantity,
            category: raw.category,
            price: raw.price,
            location: raw.location,
            predicted_demand: raw.predicted_demand,
            recommended_stock: raw.recommended_stock,
            needs_reorder: raw.needs_reorder,
        }
    }
}

/// One element of `GET /api/service-tickets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketResponse {
    pub id: String,
    pub vehicle_model: String,
    pub customer_name: String,
    pub issue: String,
    pub status: String,
    #[serde(default)]
    pub assigned_mechanic: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl TryFrom<ServiceTicketResponse> for ServiceTicket {
    type Error = DomainError;

    fn try_from(raw: ServiceTicketResponse) -> Result<Self, Self::Error> {
        Ok(ServiceTicket {
            status: raw.status.parse()?,
            created_at: parse_service_date(&raw.created_at)?,
            completed_at: raw
                .completed_at
                .as_deref()
                .map(parse_service_date)
                .transpose()?,
            id: raw.id,
            vehicle_model: raw.vehicle_model,
            customer_name: raw.customer_name,
            issue: raw.issue,
            assigned_mechanic: raw.assigned_mechanic,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub part_id: String,
    pub part_name: String,
    pub quantity: i64,
}

/// One element of `GET /api/orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub parts: Vec<OrderLineResponse>,
    pub requested_by: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

impl TryFrom<OrderResponse> for Order {
    type Error = DomainError;

    fn try_from(raw: OrderResponse) -> Result<Self, Self::Error> {
        Ok(Order {
            status: raw.status.parse()?,
            created_at: parse_service_date(&raw.created_at)?,
            estimated_delivery: raw
                .estimated_delivery
                .as_deref()
                .map(parse_service_date)
                .transpose()?,
            id: raw.id,
            parts: raw
                .parts
                .into_iter()
                .map(|line| OrderLine {
                    part_id: line.part_id,
                    part_name: line.part_name,
                    quantity: line.quantity,
                })
                .collect(),
            requested_by: raw.requested_by,
        })
    }
}

/// Which prediction models the service has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAvailability {
    #[serde(default)]
    pub sales_forecast: bool,
    #[serde(default)]
    pub parts_demand: bool,
}

/// Row counts of the datasets behind the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStats {
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default)]
    pub total_parts: u64,
    #[serde(default)]
    pub total_tickets: u64,
}

/// `GET /api/metadata`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Free-form generation metadata; shape is owned by the service.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub models: ModelAvailability,
    #[serde(default)]
    pub data_stats: DataStats,
}

/// Map every raw record, failing on the first invalid one.
pub(crate) fn map_all<R, T>(raw: Vec<R>) -> Result<Vec<T>, DomainError>
where
    T: TryFrom<R, Error = DomainError>,
{
    raw.into_iter().map(T::try_from).collect()
}
