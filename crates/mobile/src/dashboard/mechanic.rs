//! Mechanic dashboard.

use ecorp_core::{ServiceTicket, TicketStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBoard {
    pub my_tickets: Vec<ServiceTicket>,
    pub open_tickets: Vec<ServiceTicket>,
}

impl TicketBoard {
    pub fn for_mechanic(tickets: &[ServiceTicket], mechanic: &str) -> Self {
        Self {
            my_tickets: tickets
                .iter()
                .filter(|t| t.is_assigned_to(mechanic))
                .cloned()
                .collect(),
            open_tickets: tickets
                .iter()
                .filter(|t| t.status == TicketStatus::Open)
                .cloned()
                .collect(),
        }
    }
}
