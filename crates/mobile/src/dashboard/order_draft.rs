//! Order-parts draft built on the warehouse screen.

use chrono::{DateTime, Utc};
use ecorp_core::{Order, OrderLine, OrderStatus, Part};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderDraftError {
    #[error("unknown part {0:?}")]
    UnknownPart(String),
    #[error("Please enter a valid quantity.")]
    InvalidQuantity(i64),
    #[error("Please add at least one part to your order.")]
    Empty,
}

/// Draft line: quantity plus the unit price at the time it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub part_id: String,
    pub part_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl DraftLine {
    pub fn cost(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of a catalog part. Adding a part already on the draft
    /// increases its quantity.
    pub fn add(&mut self, catalog: &[Part], part_id: &str, quantity: i64) -> Result<(), OrderDraftError> {
        let part = catalog
            .iter()
            .find(|p| p.id == part_id)
            .ok_or_else(|| OrderDraftError::UnknownPart(part_id.to_string()))?;
        if quantity <= 0 {
            return Err(OrderDraftError::InvalidQuantity(quantity));
        }

        match self.lines.iter_mut().find(|l| l.part_id == part_id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(OrderDraftError::InvalidQuantity(quantity))?;
            }
            None => self.lines.push(DraftLine {
                part_id: part.id.clone(),
                part_name: part.name.clone(),
                quantity,
                unit_price: part.price,
            }),
        }
        Ok(())
    }

    /// Drop a part from the draft; returns whether it was present.
    pub fn remove(&mut self, part_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.part_id != part_id);
        self.lines.len() != before
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(DraftLine::cost).sum()
    }

    /// Turn the draft into a pending order.
    pub fn submit(
        self,
        id: impl Into<String>,
        requested_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Order, OrderDraftError> {
        if self.lines.is_empty() {
            return Err(OrderDraftError::Empty);
        }

        Ok(Order {
            id: id.into(),
            parts: self
                .lines
                .into_iter()
                .map(|l| OrderLine {
                    part_id: l.part_id,
                    part_name: l.part_name,
                    quantity: l.quantity,
                })
                .collect(),
            requested_by: requested_by.into(),
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery: None,
        })
    }
}
