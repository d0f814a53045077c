//! `ecorp-core` — domain records shared by the client and the mobile shell.
//!
//! This crate contains **pure domain** types (no IO, no HTTP). Everything the
//! remote service returns is mapped into these records before consumers see it,
//! and the built-in fallback datasets are expressed in the same types.

pub mod analytics;
pub mod date;
pub mod error;
pub mod fixtures;
pub mod id;
pub mod order;
pub mod part;
pub mod sale;
pub mod scan;
pub mod ticket;

pub use analytics::{AnalyticsData, DealershipMetrics, MonthlySales};
pub use date::parse_service_date;
pub use error::{DomainError, DomainResult};
pub use id::SessionId;
pub use order::{Order, OrderLine, OrderStatus};
pub use part::Part;
pub use sale::Sale;
pub use scan::{ScanKind, ScanRecord};
pub use ticket::{ServiceTicket, TicketStatus};
