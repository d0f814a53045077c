//! The seam between the data layer and whatever serves it.

use async_trait::async_trait;
use ecorp_core::{AnalyticsData, Order, Part, Sale, ServiceTicket};

use crate::client::MlServiceClient;
use crate::error::FetchResult;

/// Anything that can serve the five resource kinds plus a health check.
///
/// `MlServiceClient` is the production implementation; tests and offline
/// shells can provide their own.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_analytics(&self) -> FetchResult<AnalyticsData>;

    async fn fetch_sales(&self, limit: u32) -> FetchResult<Vec<Sale>>;

    async fn fetch_parts(&self) -> FetchResult<Vec<Part>>;

    async fn fetch_service_tickets(&self, limit: u32) -> FetchResult<Vec<ServiceTicket>>;

    async fn fetch_orders(&self) -> FetchResult<Vec<Order>>;

    /// `true` only when the service is up with its models loaded. Never fails.
    async fn check_health(&self) -> bool;
}

#[async_trait]
impl DataSource for MlServiceClient {
    async fn fetch_analytics(&self) -> FetchResult<AnalyticsData> {
        MlServiceClient::fetch_analytics(self).await
    }

    async fn fetch_sales(&self, limit: u32) -> FetchResult<Vec<Sale>> {
        MlServiceClient::fetch_sales(self, limit).await
    }

    async fn fetch_parts(&self) -> FetchResult<Vec<Part>> {
        MlServiceClient::fetch_parts(self).await
    }

    async fn fetch_service_tickets(&self, limit: u32) -> FetchResult<Vec<ServiceTicket>> {
        MlServiceClient::fetch_service_tickets(self, limit).await
    }

    async fn fetch_orders(&self) -> FetchResult<Vec<Order>> {
        MlServiceClient::fetch_orders(self).await
    }

    async fn check_health(&self) -> bool {
        MlServiceClient::check_health(self).await
    }
}
