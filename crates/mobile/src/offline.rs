//! Connectivity and data-origin indicators.

use serde::{Deserialize, Serialize};

/// Where the data currently on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Live from the prediction service.
    Remote,
    /// Built-in fallback dataset.
    Fallback,
}

impl DataOrigin {
    pub fn from_using_remote(using_remote: bool) -> Self {
        if using_remote {
            DataOrigin::Remote
        } else {
            DataOrigin::Fallback
        }
    }

    /// Short badge rendered next to section headers.
    pub fn badge(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "(ML)",
            DataOrigin::Fallback => "offline",
        }
    }
}

/// Connectivity state of the prediction service, as reported by the health
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// Check still in flight.
    Checking,
    /// Service up with models loaded.
    Online,
    /// Unreachable, unhealthy, or models not loaded.
    Offline,
}

impl ConnectivityState {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityState::Checking => "checking",
            ConnectivityState::Online => "ML service online",
            ConnectivityState::Offline => "ML service offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_follows_using_remote() {
        assert_eq!(DataOrigin::from_using_remote(true).badge(), "(ML)");
        assert_eq!(DataOrigin::from_using_remote(false).badge(), "offline");
    }
}
