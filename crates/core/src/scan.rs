//! Warehouse barcode scans.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a scanned movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Incoming,
    Outgoing,
}

/// A recorded scan of parts entering or leaving the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: String,
    pub part_id: String,
    pub part_name: String,
    pub sku: String,
    #[serde(rename = "type")]
    pub kind: ScanKind,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub scanned_by: String,
}

impl ScanRecord {
    pub fn scanned_on(&self, day: NaiveDate) -> bool {
        self.timestamp.date_naive() == day
    }
}
