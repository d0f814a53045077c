//! Customer-service inquiry desk.
//!
//! In-memory only: new and resolved inquiries live as long as the desk.

use chrono::{DateTime, Utc};
use ecorp_core::date::utc_ymd;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("inquiry {0} not found")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Open,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub customer_name: String,
    pub topic: String,
    pub description: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Form input for a new inquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInquiry {
    pub customer_name: String,
    pub topic: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryDesk {
    inquiries: Vec<Inquiry>,
}

impl InquiryDesk {
    pub fn new(inquiries: Vec<Inquiry>) -> Self {
        Self { inquiries }
    }

    /// Desk pre-filled with the standard nine inquiries.
    pub fn seeded() -> Self {
        let seed = [
            ("John Doe", "Charging Question", "How long does it take to fully charge?", InquiryStatus::Open, 10),
            ("Jane Smith", "Warranty Info", "What does the warranty cover?", InquiryStatus::Resolved, 9),
            ("Mike Johnson", "Range Concerns", "I'm worried about range anxiety. What's the real-world range?", InquiryStatus::Open, 11),
            ("Sarah Wilson", "Financing Options", "What financing plans do you offer? Can I get pre-approved?", InquiryStatus::Open, 11),
            ("David Brown", "Maintenance Schedule", "How often do I need to bring the car in for maintenance?", InquiryStatus::Open, 10),
            ("Lisa Garcia", "Test Drive Request", "I'd like to schedule a test drive for this weekend.", InquiryStatus::Open, 12),
            ("Robert Taylor", "Software Updates", "How do I get the latest software updates for my vehicle?", InquiryStatus::Resolved, 8),
            ("Emily Davis", "Charging Station Locator", "Where can I find charging stations near my home?", InquiryStatus::Resolved, 7),
            ("Chris Anderson", "Delivery Timeline", "When will my ordered vehicle be ready for pickup?", InquiryStatus::Resolved, 6),
        ];

        let inquiries = seed
            .into_iter()
            .enumerate()
            .map(|(i, (customer, topic, description, status, day))| Inquiry {
                id: format!("I{:03}", i + 1),
                customer_name: customer.into(),
                topic: topic.into(),
                description: description.into(),
                status,
                created_at: utc_ymd(2025, 10, day),
            })
            .collect();

        Self::new(inquiries)
    }

    /// All inquiries, newest submission first.
    pub fn all(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn open(&self) -> impl Iterator<Item = &Inquiry> {
        self.with_status(InquiryStatus::Open)
    }

    pub fn resolved(&self) -> impl Iterator<Item = &Inquiry> {
        self.with_status(InquiryStatus::Resolved)
    }

    fn with_status(&self, status: InquiryStatus) -> impl Iterator<Item = &Inquiry> {
        self.inquiries.iter().filter(move |i| i.status == status)
    }

    /// Log a new open inquiry at the top of the list.
    ///
    /// Ids continue from the current count (`I010` after the nine seeded ones).
    pub fn submit(&mut self, form: NewInquiry, at: DateTime<Utc>) -> Result<&Inquiry, InquiryError> {
        let NewInquiry {
            customer_name,
            topic,
            description,
        } = form;
        if [&customer_name, &topic, &description]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(InquiryError::MissingFields);
        }

        let inquiry = Inquiry {
            id: format!("I{:03}", self.inquiries.len() + 1),
            customer_name,
            topic,
            description,
            status: InquiryStatus::Open,
            created_at: at,
        };
        tracing::info!(inquiry_id = %inquiry.id, topic = %inquiry.topic, "inquiry logged");

        self.inquiries.insert(0, inquiry);
        Ok(&self.inquiries[0])
    }

    /// Mark an inquiry resolved. Resolving twice is a no-op.
    pub fn resolve(&mut self, id: &str) -> Result<&Inquiry, InquiryError> {
        let inquiry = self
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| InquiryError::NotFound(id.to_string()))?;
        inquiry.status = InquiryStatus::Resolved;
        tracing::info!(inquiry_id = %inquiry.id, "inquiry resolved");
        Ok(inquiry)
    }
}

impl Default for InquiryDesk {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, topic: &str, description: &str) -> NewInquiry {
        NewInquiry {
            customer_name: name.into(),
            topic: topic.into(),
            description: description.into(),
        }
    }

    #[test]
    fn seeded_desk_has_five_open_and_four_resolved() {
        let desk = InquiryDesk::seeded();
        assert_eq!(desk.all().len(), 9);
        assert_eq!(desk.open().count(), 5);
        assert_eq!(desk.resolved().count(), 4);
        assert_eq!(desk.all()[8].id, "I009");
    }

    #[test]
    fn submit_prepends_with_next_id() {
        let mut desk = InquiryDesk::seeded();
        let at = utc_ymd(2025, 10, 13);

        let created = desk
            .submit(form("Ann Lee", "Trade-in", "What is my car worth?"), at)
            .unwrap()
            .clone();

        assert_eq!(created.id, "I010");
        assert_eq!(created.status, InquiryStatus::Open);
        assert_eq!(desk.all()[0], created);
        assert_eq!(desk.open().count(), 6);
    }

    #[test]
    fn submit_requires_every_field() {
        let mut desk = InquiryDesk::seeded();
        let at = utc_ymd(2025, 10, 13);
        assert_eq!(
            desk.submit(form("Ann Lee", " ", "Question"), at),
            Err(InquiryError::MissingFields)
        );
        assert_eq!(desk.all().len(), 9);
    }

    #[test]
    fn resolve_moves_inquiry_between_partitions() {
        let mut desk = InquiryDesk::seeded();
        desk.resolve("I001").unwrap();
        assert_eq!(desk.open().count(), 4);
        assert!(desk.resolve("I001").is_ok());
        assert_eq!(desk.resolve("I404"), Err(InquiryError::NotFound("I404".into())));
    }
}
