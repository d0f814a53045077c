use core::str::FromStr;

use ecorp_core::DomainError;
use serde::{Deserialize, Serialize};

/// Job role selected at login.
///
/// Closed set: every role maps to exactly one screen stack and one preset user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Warehouse,
    Sales,
    CustomerService,
    Mechanic,
    Csuite,
}

impl Role {
    /// All roles, in login-picker order.
    pub const ALL: [Role; 5] = [
        Role::Warehouse,
        Role::Sales,
        Role::CustomerService,
        Role::Mechanic,
        Role::Csuite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Warehouse => "warehouse",
            Role::Sales => "sales",
            Role::CustomerService => "customer_service",
            Role::Mechanic => "mechanic",
            Role::Csuite => "csuite",
        }
    }

    /// Title shown on the login picker (also used as the display name).
    pub fn title(&self) -> &'static str {
        match self {
            Role::Warehouse => "Warehouse Worker",
            Role::Sales => "Sales Person",
            Role::CustomerService => "Customer Service",
            Role::Mechanic => "Mechanic",
            Role::Csuite => "Executive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Warehouse => "Scan parts & manage inventory",
            Role::Sales => "Manage sales & customers",
            Role::CustomerService => "Handle customer inquiries",
            Role::Mechanic => "Service tickets & repairs",
            Role::Csuite => "View analytics & reports",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::unknown_variant("role", s))
    }
}
