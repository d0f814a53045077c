//! `ecorp-mobile`
//!
//! **Responsibility:** the app shell's data layer and role plumbing.
//!
//! This crate provides:
//! - Resource hooks: per-resource state fed by the prediction service, with
//!   built-in fallback data whenever a fetch fails
//! - A one-shot service health check for the connectivity badge
//! - Role-based navigation and the per-role home screens
//!
//! The service stays optional: every screen works from fallback data.

pub mod dashboard;
pub mod health;
pub mod hooks;
pub mod navigation;
pub mod offline;
pub mod resource;
pub mod screens;

pub use health::{HealthState, ServiceHealth};
pub use hooks::{
    Analytics, AnalyticsResource, Orders, OrdersResource, Parts, PartsResource, Sales,
    SalesResource, ServiceTickets, ServiceTicketsResource,
};
pub use navigation::{Screen, home_screen, role_stack, screen_stack};
pub use screens::{HomeScreen, build_home};
pub use offline::{ConnectivityState, DataOrigin};
pub use resource::{Resource, ResourceKind, ResourceState};
