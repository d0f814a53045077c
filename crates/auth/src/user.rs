//! Users and the preset directory backing the role picker.

use serde::{Deserialize, Serialize};

use crate::Role;

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl User {
    /// The preset user for a role.
    pub fn preset(role: Role) -> Self {
        let (id, name, email, location) = match role {
            Role::Warehouse => ("1", "John Warehouse", "john@ecorp.com", "California HQ"),
            Role::Sales => ("2", "Sarah Sales", "sarah@ecorp.com", "New York Dealership"),
            Role::CustomerService => ("3", "Mike Service", "mike@ecorp.com", "Texas Dealership"),
            Role::Mechanic => ("4", "Tom Mechanic", "tom@ecorp.com", "Florida Dealership"),
            Role::Csuite => ("5", "Emily Executive", "emily@ecorp.com", "California HQ"),
        };

        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            location: Some(location.to_string()),
        }
    }
}
