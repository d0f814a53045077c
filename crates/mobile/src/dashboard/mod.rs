//! Per-role dashboard view models.
//!
//! Pure functions over hook snapshots and session data; nothing here performs
//! IO. The inquiry desk and order draft hold local, in-memory state only.

pub mod executive;
pub mod inquiries;
pub mod mechanic;
pub mod order_draft;
pub mod sales;
pub mod warehouse;

pub use executive::{ExecutiveSummary, MonthBar};
pub use inquiries::{Inquiry, InquiryDesk, InquiryError, InquiryStatus, NewInquiry};
pub use mechanic::TicketBoard;
pub use order_draft::{DraftLine, OrderDraft, OrderDraftError};
pub use sales::SalesSummary;
pub use warehouse::{ScanError, ScanRequest, WarehouseSummary};
