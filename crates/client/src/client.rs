//! HTTP client for the prediction/analytics service.

use ecorp_core::{AnalyticsData, Order, Part, Sale, ServiceTicket};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::config::ServiceConfig;
use crate::error::{FetchError, FetchResult};
use crate::wire::{
    AnalyticsResponse, HealthResponse, OrderResponse, PartResponse, SaleResponse,
    ServiceMetadata, ServiceTicketResponse, map_all,
};

/// Default page size used by the hooks when no limit is given.
pub const DEFAULT_LIMIT: u32 = 50;

/// Client for the prediction service.
///
/// Every operation is a single GET: no retries, no caching, and no timeout
/// beyond what the underlying `reqwest::Client` was built with.
#[derive(Debug, Clone)]
pub struct MlServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl MlServiceClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, timeouts).
    pub fn with_http_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn get_json<T>(&self, path: &str, limit: Option<u32>) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let mut req = self.http.get(&url).header(CONTENT_TYPE, "application/json");
        if let Some(limit) = limit {
            req = req.query(&[("limit", limit)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET /health`: `true` only when the service reports `healthy` with its
    /// models loaded. Every failure collapses to `false`.
    pub async fn check_health(&self) -> bool {
        match self.get_json::<HealthResponse>("/health", None).await {
            Ok(health) => health.is_ready(),
            Err(err) => {
                tracing::warn!(error = %err, "prediction service not available");
                false
            }
        }
    }

    /// `GET /api/analytics`
    pub async fn fetch_analytics(&self) -> FetchResult<AnalyticsData> {
        let raw: AnalyticsResponse = self.get_json("/api/analytics", None).await?;
        let analytics = AnalyticsData::from(raw);
        tracing::debug!(
            dealerships = analytics.dealerships.len(),
            months = analytics.monthly_sales.len(),
            "fetched analytics"
        );
        Ok(analytics)
    }

    /// `GET /api/sales?limit=N`
    pub async fn fetch_sales(&self, limit: u32) -> FetchResult<Vec<Sale>> {
        let raw: Vec<SaleResponse> = self.get_json("/api/sales", Some(limit)).await?;
        let sales: Vec<Sale> = map_all(raw)?;
        tracing::debug!(count = sales.len(), limit, "fetched sales");
        Ok(sales)
    }

    /// `GET /api/parts`
    pub async fn fetch_parts(&self) -> FetchResult<Vec<Part>> {
        let raw: Vec<PartResponse> = self.get_json("/api/parts", None).await?;
        let parts: Vec<Part> = raw.into_iter().map(Part::from).collect();
        tracing::debug!(count = parts.len(), "fetched parts");
        Ok(parts)
    }

    /// `GET /api/service-tickets?limit=N`
    pub async fn fetch_service_tickets(&self, limit: u32) -> FetchResult<Vec<ServiceTicket>> {
        let raw: Vec<ServiceTicketResponse> =
            self.get_json("/api/service-tickets", Some(limit)).await?;
        let tickets: Vec<ServiceTicket> = map_all(raw)?;
        tracing::debug!(count = tickets.len(), limit, "fetched service tickets");
        Ok(tickets)
    }

    /// `GET /api/orders`
    pub async fn fetch_orders(&self) -> FetchResult<Vec<Order>> {
        let raw: Vec<OrderResponse> = self.get_json("/api/orders", None).await?;
        let orders: Vec<Order> = map_all(raw)?;
        tracing::debug!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    /// `GET /api/metadata`
    pub async fn fetch_metadata(&self) -> FetchResult<ServiceMetadata> {
        self.get_json("/api/metadata", None).await
    }
}
