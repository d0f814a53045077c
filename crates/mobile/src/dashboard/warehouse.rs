//! Warehouse dashboard and the scan-part flow.

use chrono::{DateTime, NaiveDate, Utc};
use ecorp_core::{Part, ScanKind, ScanRecord};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Part not found. Please check the SKU.")]
    PartNotFound(String),
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),
    #[error("Please specify a destination for outgoing parts.")]
    MissingDestination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseSummary {
    pub total_parts: usize,
    pub scans_today: Vec<ScanRecord>,
    /// Parts the service (or stock level) flags for reorder.
    pub needs_reorder: Vec<Part>,
}

impl WarehouseSummary {
    pub fn build(parts: &[Part], scans: &[ScanRecord], today: NaiveDate) -> Self {
        Self {
            total_parts: parts.len(),
            scans_today: scans_on(scans, today),
            needs_reorder: parts.iter().filter(|p| p.should_reorder()).cloned().collect(),
        }
    }
}

/// Scans recorded on `day`, in recorded order.
pub fn scans_on(scans: &[ScanRecord], day: NaiveDate) -> Vec<ScanRecord> {
    scans.iter().filter(|s| s.scanned_on(day)).cloned().collect()
}

/// Look up a part by SKU, ignoring case and surrounding whitespace.
pub fn find_by_sku<'a>(parts: &'a [Part], sku: &str) -> Result<&'a Part, ScanError> {
    let sku = sku.trim();
    parts
        .iter()
        .find(|p| p.sku.eq_ignore_ascii_case(sku))
        .ok_or_else(|| ScanError::PartNotFound(sku.to_string()))
}

/// Form input for one scan submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    pub kind: Option<ScanKind>,
    pub quantity: Option<i64>,
    pub destination: Option<String>,
}

impl ScanRequest {
    /// Validate the form against the scanned part and build the record.
    ///
    /// The id continues the numbering of `existing` (`S001`, `S002`, ...).
    pub fn into_record(
        self,
        part: &Part,
        existing: &[ScanRecord],
        scanned_by: &str,
        at: DateTime<Utc>,
    ) -> Result<ScanRecord, ScanError> {
        let (Some(kind), Some(quantity)) = (self.kind, self.quantity) else {
            return Err(ScanError::MissingFields);
        };
        if quantity <= 0 {
            return Err(ScanError::InvalidQuantity(quantity));
        }

        let destination = self
            .destination
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if kind == ScanKind::Outgoing && destination.is_none() {
            return Err(ScanError::MissingDestination);
        }

        Ok(ScanRecord {
            id: format!("S{:03}", existing.len() + 1),
            part_id: part.id.clone(),
            part_name: part.name.clone(),
            sku: part.sku.clone(),
            kind,
            quantity,
            destination: match kind {
                ScanKind::Outgoing => destination,
                ScanKind::Incoming => None,
            },
            timestamp: at,
            scanned_by: scanned_by.to_string(),
        })
    }
}
