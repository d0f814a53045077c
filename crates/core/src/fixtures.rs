//! Built-in fallback datasets.
//!
//! These are served whenever the prediction service cannot be reached, so the
//! app stays fully usable in a non-live mode. Each call returns a fresh copy.

use crate::analytics::{AnalyticsData, DealershipMetrics, MonthlySales};
use crate::date::{utc_ymd, utc_ymd_hm};
use crate::order::{Order, OrderLine, OrderStatus};
use crate::part::Part;
use crate::sale::Sale;
use crate::scan::{ScanKind, ScanRecord};
use crate::ticket::{ServiceTicket, TicketStatus};

fn part(id: &str, name: &str, sku: &str, quantity: i64, category: &str, price: f64, location: &str) -> Part {
    Part {
        id: id.into(),
        name: name.into(),
        sku: sku.into(),
        quantity,
        category: category.into(),
        price,
        location: Some(location.into()),
        predicted_demand: None,
        recommended_stock: None,
        needs_reorder: None,
    }
}

pub fn parts() -> Vec<Part> {
    vec![
        part("P001", "Battery Pack", "BAT-5000", 45, "Power", 8500.0, "A-12"),
        part("P002", "Electric Motor", "MOT-3000", 23, "Drivetrain", 12000.0, "B-8"),
        part("P003", "Charging Port", "CHG-200", 156, "Electrical", 450.0, "C-4"),
        part("P004", "Display Console", "DSP-100", 78, "Interior", 1200.0, "D-15"),
    ]
}

pub fn scan_records() -> Vec<ScanRecord> {
    vec![
        ScanRecord {
            id: "S001".into(),
            part_id: "P001".into(),
            part_name: "Battery Pack".into(),
            sku: "BAT-5000".into(),
            kind: ScanKind::Outgoing,
            quantity: 2,
            destination: Some("New York Dealership".into()),
            timestamp: utc_ymd_hm(2025, 10, 9, 10, 30),
            scanned_by: "John Warehouse".into(),
        },
        ScanRecord {
            id: "S002".into(),
            part_id: "P003".into(),
            part_name: "Charging Port".into(),
            sku: "CHG-200".into(),
            kind: ScanKind::Incoming,
            quantity: 50,
            destination: None,
            timestamp: utc_ymd_hm(2025, 10, 9, 14, 15),
            scanned_by: "John Warehouse".into(),
        },
    ]
}

fn line(part_id: &str, part_name: &str, quantity: i64) -> OrderLine {
    OrderLine {
        part_id: part_id.into(),
        part_name: part_name.into(),
        quantity,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "O001".into(),
            parts: vec![
                line("P001", "Battery Pack", 1),
                line("P004", "Display Console", 2),
            ],
            requested_by: "Tom Mechanic".into(),
            status: OrderStatus::Approved,
            created_at: utc_ymd(2025, 10, 8),
            estimated_delivery: Some(utc_ymd(2025, 10, 12)),
        },
        Order {
            id: "O002".into(),
            parts: vec![line("P002", "Electric Motor", 1)],
            requested_by: "Sarah Sales".into(),
            status: OrderStatus::Pending,
            created_at: utc_ymd(2025, 10, 10),
            estimated_delivery: None,
        },
    ]
}

pub fn sales() -> Vec<Sale> {
    vec![
        Sale {
            id: "SL001".into(),
            dealership: "New York Dealership".into(),
            model: "E-Sedan Pro".into(),
            price: 45000.0,
            sales_person: "Sarah Sales".into(),
            date: utc_ymd(2025, 10, 5),
            customer_name: "Robert Johnson".into(),
        },
        Sale {
            id: "SL002".into(),
            dealership: "New York Dealership".into(),
            model: "E-SUV Elite".into(),
            price: 62000.0,
            sales_person: "Sarah Sales".into(),
            date: utc_ymd(2025, 10, 8),
            customer_name: "Jennifer Smith".into(),
        },
    ]
}

pub fn service_tickets() -> Vec<ServiceTicket> {
    vec![
        ServiceTicket {
            id: "T001".into(),
            vehicle_model: "E-Sedan Pro".into(),
            customer_name: "David Wilson".into(),
            issue: "Charging port not working".into(),
            status: TicketStatus::InProgress,
            assigned_mechanic: Some("Tom Mechanic".into()),
            created_at: utc_ymd(2025, 10, 9),
            completed_at: None,
        },
        ServiceTicket {
            id: "T002".into(),
            vehicle_model: "E-SUV Elite".into(),
            customer_name: "Lisa Brown".into(),
            issue: "Battery range reduced".into(),
            status: TicketStatus::Open,
            assigned_mechanic: None,
            created_at: utc_ymd(2025, 10, 10),
            completed_at: None,
        },
    ]
}

fn dealership(
    name: &str,
    location: &str,
    sales_ytd: f64,
    sales_projected: f64,
    parts_cost_ytd: f64,
    parts_cost_projected: f64,
) -> DealershipMetrics {
    DealershipMetrics {
        name: name.into(),
        location: location.into(),
        sales_ytd,
        sales_projected,
        parts_cost_ytd,
        parts_cost_projected,
    }
}

pub fn analytics() -> AnalyticsData {
    let monthly_sales = [
        ("Jan", 1_200_000.0),
        ("Feb", 1_100_000.0),
        ("Mar", 1_350_000.0),
        ("Apr", 1_280_000.0),
        ("May", 1_450_000.0),
        ("Jun", 1_320_000.0),
        ("Jul", 1_400_000.0),
        ("Aug", 1_500_000.0),
        ("Sep", 1_600_000.0),
        ("Oct", 500_000.0),
    ]
    .into_iter()
    .map(|(month, amount)| MonthlySales {
        month: month.into(),
        amount,
    })
    .collect();

    AnalyticsData {
        total_sales_ytd: 12_500_000.0,
        total_sales_projected: 18_000_000.0,
        total_parts_cost_ytd: 2_800_000.0,
        total_parts_cost_projected: 4_200_000.0,
        dealerships: vec![
            dealership("New York Dealership", "New York, NY", 4_200_000.0, 6_000_000.0, 950_000.0, 1_400_000.0),
            dealership("Texas Dealership", "Austin, TX", 3_800_000.0, 5_500_000.0, 820_000.0, 1_200_000.0),
            dealership("Florida Dealership", "Miami, FL", 4_500_000.0, 6_500_000.0, 1_030_000.0, 1_600_000.0),
        ],
        monthly_sales,
    }
}

/// First `limit` items of a fallback list.
pub fn truncated<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
