//! Service health hook: one check at mount, feeding the connectivity badge.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ecorp_client::DataSource;
use tokio::sync::watch;

use crate::offline::ConnectivityState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthState {
    pub is_available: bool,
    pub is_checking: bool,
}

impl HealthState {
    pub const CHECKING: HealthState = HealthState {
        is_available: false,
        is_checking: true,
    };

    pub fn connectivity(&self) -> ConnectivityState {
        match (self.is_checking, self.is_available) {
            (true, _) => ConnectivityState::Checking,
            (false, true) => ConnectivityState::Online,
            (false, false) => ConnectivityState::Offline,
        }
    }
}

struct Inner {
    state: watch::Sender<HealthState>,
    mounted: AtomicBool,
}

/// Health hook. The check runs once; there is no re-check.
///
/// Dropping the hook before the check resolves discards its result.
pub struct ServiceHealth {
    inner: Arc<Inner>,
}

impl ServiceHealth {
    /// Start the check in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn DataSource>) -> Self {
        let (state, _) = watch::channel(HealthState::CHECKING);
        let inner = Arc::new(Inner {
            state,
            mounted: AtomicBool::new(true),
        });

        let task_inner = Arc::clone(&inner);
        tokio::spawn(async move {
            let is_available = source.check_health().await;
            if !task_inner.mounted.load(Ordering::Acquire) {
                tracing::debug!("health hook unmounted, discarding health result");
                return;
            }
            tracing::info!(is_available, "prediction service health checked");
            task_inner.state.send_replace(HealthState {
                is_available,
                is_checking: false,
            });
        });

        Self { inner }
    }

    pub fn snapshot(&self) -> HealthState {
        *self.inner.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<HealthState> {
        self.inner.state.subscribe()
    }

    /// Wait for the check to resolve.
    pub async fn settled(&self) -> HealthState {
        let mut rx = self.subscribe();
        let settled = rx.wait_for(|state| !state.is_checking).await.map(|s| *s);
        settled.unwrap_or_else(|_| self.snapshot())
    }
}

impl Drop for ServiceHealth {
    fn drop(&mut self) {
        self.inner.mounted.store(false, Ordering::Release);
    }
}
