//! Role-based screen stacks.

use ecorp_auth::{Role, Session};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    WarehouseDashboard,
    ScanPart,
    OrderParts,
    SalesDashboard,
    CustomerServiceDashboard,
    MechanicDashboard,
    CSuiteDashboard,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "E Corp",
            Screen::WarehouseDashboard => "Warehouse Dashboard",
            Screen::ScanPart => "Scan Part",
            Screen::OrderParts => "Order Parts",
            Screen::SalesDashboard => "Sales Dashboard",
            Screen::CustomerServiceDashboard => "Customer Service",
            Screen::MechanicDashboard => "Mechanic Dashboard",
            Screen::CSuiteDashboard => "Executive Dashboard",
        }
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.title())
    }
}

/// Screens reachable by a role; the first one is its home.
pub fn role_stack(role: Role) -> &'static [Screen] {
    match role {
        Role::Warehouse => &[Screen::WarehouseDashboard, Screen::ScanPart, Screen::OrderParts],
        Role::Sales => &[Screen::SalesDashboard],
        Role::CustomerService => &[Screen::CustomerServiceDashboard],
        Role::Mechanic => &[Screen::MechanicDashboard],
        Role::Csuite => &[Screen::CSuiteDashboard],
    }
}

/// Screens available for the current session.
pub fn screen_stack(session: &Session) -> &'static [Screen] {
    match session.user() {
        Some(user) => role_stack(user.role),
        None => &[Screen::Login],
    }
}

/// Home screen for the current session.
pub fn home_screen(session: &Session) -> Screen {
    screen_stack(session)
        .first()
        .copied()
        .unwrap_or(Screen::Login)
}
