//! Service tickets.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Service ticket lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Completed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Completed => "completed",
        }
    }
}

impl core::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "completed" => Ok(TicketStatus::Completed),
            other => Err(DomainError::unknown_variant("ticket status", other)),
        }
    }
}

/// A customer's vehicle service ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    pub id: String,
    pub vehicle_model: String,
    pub customer_name: String,
    pub issue: String,
    pub status: TicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_mechanic: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ServiceTicket {
    pub fn is_assigned_to(&self, mechanic: &str) -> bool {
        self.assigned_mechanic.as_deref() == Some(mechanic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_wire_names() {
        assert_eq!("open".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
        assert_eq!(
            "in_progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            "completed".parse::<TicketStatus>().unwrap(),
            TicketStatus::Completed
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "closed".parse::<TicketStatus>().unwrap_err();
        assert_eq!(err, DomainError::unknown_variant("ticket status", "closed"));
    }

    #[test]
    fn status_display_matches_wire_name() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<TicketStatus>().unwrap(), status);
        }
    }
}
