use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use ecorp_client::{FetchError, MlServiceClient, ServiceConfig};
use ecorp_core::date::utc_ymd;
use ecorp_core::{OrderStatus, TicketStatus};
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> MlServiceClient {
        MlServiceClient::new(ServiceConfig::new(&self.base_url).unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on.
async fn unreachable_client() -> MlServiceClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    MlServiceClient::new(ServiceConfig::new(format!("http://{}", addr)).unwrap())
}

fn json_route(path: &str, status: StatusCode, body: Value) -> Router {
    Router::new().route(path, get(move || async move { (status, Json(body)) }))
}

fn raw_route(path: &str, body: &'static str) -> Router {
    Router::new().route(
        path,
        get(move || async move { (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body) }),
    )
}

#[derive(Debug, Clone)]
struct Recorded {
    query: Option<String>,
    content_type: Option<String>,
}

type Seen = Arc<Mutex<Vec<Recorded>>>;

async fn record_and_reply(
    State((seen, reply)): State<(Seen, Value)>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    seen.lock().unwrap().push(Recorded {
        query,
        content_type,
    });
    Json(reply)
}

fn recording_route(path: &str, reply: Value) -> (Router, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(path, get(record_and_reply))
        .with_state((seen.clone(), reply));
    (app, seen)
}

#[tokio::test]
async fn fetch_sales_passes_limit_and_parses_dates() {
    let (app, seen) = recording_route(
        "/api/sales",
        json!([{
            "id": "SL001",
            "dealership": "NY",
            "model": "E-Sedan Pro",
            "price": 45000,
            "salesPerson": "Sarah Sales",
            "date": "2025-10-05",
            "customerName": "Robert Johnson"
        }]),
    );
    let server = TestServer::spawn(app).await;

    let sales = server.client().fetch_sales(2).await.unwrap();

    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].id, "SL001");
    assert_eq!(sales[0].price, 45000.0);
    assert_eq!(sales[0].date, utc_ymd(2025, 10, 5));

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].query.as_deref(), Some("limit=2"));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn fetch_service_tickets_maps_optional_fields() {
    let (app, seen) = recording_route(
        "/api/service-tickets",
        json!([
            {
                "id": "T0001",
                "vehicleModel": "E-SUV Elite",
                "customerName": "Customer 0001",
                "issue": "Battery range reduced",
                "status": "in_progress",
                "assignedMechanic": "Service Team",
                "createdAt": "2025-10-01 09:00:00"
            },
            {
                "id": "T0002",
                "vehicleModel": "E-Sedan Pro",
                "customerName": "Customer 0002",
                "issue": "Software update",
                "status": "completed",
                "createdAt": "2025-09-28",
                "completedAt": "2025-09-30"
            }
        ]),
    );
    let server = TestServer::spawn(app).await;

    let tickets = server.client().fetch_service_tickets(50).await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].status, TicketStatus::InProgress);
    assert_eq!(tickets[0].assigned_mechanic.as_deref(), Some("Service Team"));
    assert_eq!(tickets[0].completed_at, None);
    assert_eq!(tickets[1].completed_at, Some(utc_ymd(2025, 9, 30)));
    assert_eq!(seen.lock().unwrap()[0].query.as_deref(), Some("limit=50"));
}

#[tokio::test]
async fn fetch_parts_keeps_prediction_fields() {
    let server = TestServer::spawn(json_route(
        "/api/parts",
        StatusCode::OK,
        json!([{
            "id": "P010",
            "name": "Cooling Pump",
            "sku": "CLP-10",
            "category": "Thermal",
            "quantity": 12,
            "price": 310.5,
            "predictedDemand": 9,
            "recommendedStock": 18,
            "needsReorder": true
        }]),
    ))
    .await;

    let parts = server.client().fetch_parts().await.unwrap();

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].location, None);
    assert_eq!(parts[0].predicted_demand, Some(9.0));
    assert_eq!(parts[0].recommended_stock, Some(18.0));
    assert_eq!(parts[0].needs_reorder, Some(true));
    assert!(parts[0].should_reorder());
}

#[tokio::test]
async fn fetch_orders_parses_lines_and_dates() {
    let server = TestServer::spawn(json_route(
        "/api/orders",
        StatusCode::OK,
        json!([{
            "id": "O0001",
            "parts": [{"partId": "P001", "partName": "Battery Pack", "quantity": 6}],
            "requestedBy": "Warehouse Team",
            "status": "shipped",
            "createdAt": "2025-10-03",
            "estimatedDelivery": "2025-10-07"
        }]),
    ))
    .await;

    let orders = server.client().fetch_orders().await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Shipped);
    assert_eq!(orders[0].created_at, utc_ymd(2025, 10, 3));
    assert_eq!(orders[0].estimated_delivery, Some(utc_ymd(2025, 10, 7)));
    assert_eq!(orders[0].total_units(), 6);
}

#[tokio::test]
async fn fetch_analytics_ignores_extra_fields() {
    let server = TestServer::spawn(json_route(
        "/api/analytics",
        StatusCode::OK,
        json!({
            "totalSalesYTD": 100.0,
            "totalSalesProjected": 150.0,
            "totalPartsCostYTD": 22.5,
            "totalPartsCostProjected": 33.75,
            "dealerships": [{
                "name": "Texas Dealership",
                "location": "Austin, TX",
                "salesYTD": 40.0,
                "salesProjected": 60.0,
                "partsCostYTD": 9.0,
                "partsCostProjected": 13.5
            }],
            "monthlySales": [{"month": "Jan", "amount": 10.0}],
            "generatedAt": "2025-10-12T08:00:00",
            "usingML": true
        }),
    ))
    .await;

    let analytics = server.client().fetch_analytics().await.unwrap();

    assert_eq!(analytics.total_sales_ytd, 100.0);
    assert_eq!(analytics.total_parts_cost_projected, 33.75);
    assert_eq!(analytics.dealerships[0].location, "Austin, TX");
    assert_eq!(analytics.monthly_sales[0].amount, 10.0);
}

#[tokio::test]
async fn non_success_status_fails_fetch() {
    let server = TestServer::spawn(json_route(
        "/api/parts",
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"error": "Data not loaded"}),
    ))
    .await;

    let err = server.client().fetch_parts().await.unwrap_err();
    assert_eq!(err, FetchError::Status(503));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn malformed_json_fails_fetch() {
    let server = TestServer::spawn(raw_route("/api/orders", "{not json")).await;

    let err = server.client().fetch_orders().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn wrong_shape_fails_fetch() {
    let server = TestServer::spawn(json_route(
        "/api/sales",
        StatusCode::OK,
        json!({"sales": []}),
    ))
    .await;

    let err = server.client().fetch_sales(5).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unparseable_date_fails_fetch() {
    let server = TestServer::spawn(json_route(
        "/api/sales",
        StatusCode::OK,
        json!([{
            "id": "SL9",
            "dealership": "NY",
            "model": "E-Sedan Pro",
            "price": 1,
            "salesPerson": "Sales Team",
            "date": "last tuesday",
            "customerName": "Customer 0009"
        }]),
    ))
    .await;

    let err = server.client().fetch_sales(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_service_fails_fetch() {
    let client = unreachable_client().await;

    let err = client.fetch_analytics().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn health_is_true_only_when_healthy_with_models() {
    let server = TestServer::spawn(json_route(
        "/health",
        StatusCode::OK,
        json!({"status": "healthy", "models_loaded": true, "data_loaded": true}),
    ))
    .await;
    assert!(server.client().check_health().await);
}

#[tokio::test]
async fn health_is_false_for_every_other_outcome() {
    let cases = [
        json_route(
            "/health",
            StatusCode::OK,
            json!({"status": "healthy", "models_loaded": false}),
        ),
        json_route(
            "/health",
            StatusCode::OK,
            json!({"status": "starting", "models_loaded": true}),
        ),
        json_route(
            "/health",
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"status": "healthy", "models_loaded": true}),
        ),
        raw_route("/health", "<html>oops</html>"),
    ];

    for app in cases {
        let server = TestServer::spawn(app).await;
        assert!(!server.client().check_health().await);
    }

    assert!(!unreachable_client().await.check_health().await);
}

#[tokio::test]
async fn fetch_metadata_reads_model_flags_and_stats() {
    let server = TestServer::spawn(json_route(
        "/api/metadata",
        StatusCode::OK,
        json!({
            "metadata": {"generated": "2025-10-01"},
            "models": {"salesForecast": true, "partsDemand": false},
            "dataStats": {"totalSales": 1200, "totalParts": 40, "totalTickets": 310}
        }),
    ))
    .await;

    let meta = server.client().fetch_metadata().await.unwrap();

    assert!(meta.models.sales_forecast);
    assert!(!meta.models.parts_demand);
    assert_eq!(meta.data_stats.total_tickets, 310);
    assert_eq!(meta.metadata["generated"], "2025-10-01");
}
