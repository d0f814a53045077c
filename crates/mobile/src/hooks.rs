//! The five resource hooks.
//!
//! Each kind pairs one client call with its fallback dataset. Sales and
//! service tickets carry a `limit` that is forwarded to the service and used
//! to trim the fallback list; changing it refetches.

use async_trait::async_trait;
use ecorp_client::{DEFAULT_LIMIT, DataSource, FetchResult};
use ecorp_core::{AnalyticsData, Order, Part, Sale, ServiceTicket, fixtures};

use crate::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Analytics;

#[async_trait]
impl ResourceKind for Analytics {
    type Data = AnalyticsData;
    const NAME: &'static str = "analytics";
    const OFFLINE_MESSAGE: Option<&'static str> = Some("Using offline data");

    fn fallback(&self) -> AnalyticsData {
        fixtures::analytics()
    }

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<AnalyticsData> {
        source.fetch_analytics().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sales {
    pub limit: u32,
}

impl Default for Sales {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

#[async_trait]
impl ResourceKind for Sales {
    type Data = Vec<Sale>;
    const NAME: &'static str = "sales";

    fn fallback(&self) -> Vec<Sale> {
        fixtures::truncated(fixtures::sales(), self.limit as usize)
    }

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<Vec<Sale>> {
        let sales = source.fetch_sales(self.limit).await?;
        tracing::debug!(count = sales.len(), limit = self.limit, "sales received");
        Ok(sales)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parts;

#[async_trait]
impl ResourceKind for Parts {
    type Data = Vec<Part>;
    const NAME: &'static str = "parts";

    fn fallback(&self) -> Vec<Part> {
        fixtures::parts()
    }

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<Vec<Part>> {
        let parts = source.fetch_parts().await?;
        tracing::debug!(count = parts.len(), "parts received");
        Ok(parts)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTickets {
    pub limit: u32,
}

impl Default for ServiceTickets {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

#[async_trait]
impl ResourceKind for ServiceTickets {
    type Data = Vec<ServiceTicket>;
    const NAME: &'static str = "service_tickets";

    fn fallback(&self) -> Vec<ServiceTicket> {
        fixtures::truncated(fixtures::service_tickets(), self.limit as usize)
    }

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<Vec<ServiceTicket>> {
        let tickets = source.fetch_service_tickets(self.limit).await?;
        tracing::debug!(count = tickets.len(), limit = self.limit, "service tickets received");
        Ok(tickets)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orders;

#[async_trait]
impl ResourceKind for Orders {
    type Data = Vec<Order>;
    const NAME: &'static str = "orders";

    fn fallback(&self) -> Vec<Order> {
        fixtures::orders()
    }

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<Vec<Order>> {
        let orders = source.fetch_orders().await?;
        tracing::debug!(count = orders.len(), "orders received");
        Ok(orders)
    }
}

pub type AnalyticsResource = Resource<Analytics>;
pub type SalesResource = Resource<Sales>;
pub type PartsResource = Resource<Parts>;
pub type ServiceTicketsResource = Resource<ServiceTickets>;
pub type OrdersResource = Resource<Orders>;

impl Resource<Sales> {
    /// Change the page size; refetches when it differs.
    pub fn set_limit(&self, limit: u32) -> bool {
        self.set_kind(Sales { limit })
    }
}

impl Resource<ServiceTickets> {
    /// Change the page size; refetches when it differs.
    pub fn set_limit(&self, limit: u32) -> bool {
        self.set_kind(ServiceTickets { limit })
    }
}
