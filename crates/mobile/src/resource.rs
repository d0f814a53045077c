//! Reactive resource state with remote fetch and local fallback.
//!
//! A [`Resource`] owns one state slice for one resource kind. Each fetch
//! cycle marks the state as loading, asks the [`DataSource`] for fresh data,
//! and replaces the state wholesale with either the remote result or the
//! kind's fallback dataset. Failures never escape: they are logged and turned
//! into fallback state.
//!
//! Ordering rules:
//! - Cycles are numbered; only the most recently started cycle may write its
//!   result. An older cycle that resolves late is discarded.
//! - Once the owning `Resource` is dropped, in-flight cycles still run to
//!   completion but their results are discarded.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use ecorp_client::{DataSource, FetchResult};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::offline::DataOrigin;

/// One resource kind: how to fetch it and what to show when that fails.
#[async_trait]
pub trait ResourceKind: Send + Sync + 'static {
    type Data: Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static;

    /// Name used in logs.
    const NAME: &'static str;

    /// Message exposed in [`ResourceState::error`] while serving fallback
    /// data. Kinds without one leave `error` empty.
    const OFFLINE_MESSAGE: Option<&'static str> = None;

    /// Fallback dataset (already trimmed to any limit the kind carries).
    fn fallback(&self) -> Self::Data;

    async fn fetch(&self, source: &dyn DataSource) -> FetchResult<Self::Data>;
}

/// Snapshot observed by screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: T,
    pub loading: bool,
    pub using_remote: bool,
    pub error: Option<String>,
}

impl<T> ResourceState<T> {
    pub fn origin(&self) -> DataOrigin {
        DataOrigin::from_using_remote(self.using_remote)
    }
}

struct Inner<K: ResourceKind> {
    source: Arc<dyn DataSource>,
    kind: Mutex<Arc<K>>,
    state: watch::Sender<ResourceState<K::Data>>,
    generation: AtomicU64,
    mounted: AtomicBool,
}

impl<K: ResourceKind> Inner<K> {
    fn kind(&self) -> Arc<K> {
        self.kind
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Open a fetch cycle: claim the next generation and mark the state as
    /// loading, both under the state lock. Called before spawning.
    fn begin(&self) -> Option<(u64, Arc<K>)> {
        if !self.is_mounted() {
            return None;
        }

        let kind = self.kind();
        let mut generation = 0;
        self.state.send_if_modified(|state| {
            generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            let changed = !state.loading || state.error.is_some();
            state.loading = true;
            state.error = None;
            changed
        });
        Some((generation, kind))
    }

    /// One full fetch cycle.
    async fn load(&self) {
        if let Some((generation, kind)) = self.begin() {
            self.complete(generation, kind).await;
        }
    }

    /// Fetch and publish the outcome of cycle `generation` unless a newer
    /// cycle started or the hook was unmounted meanwhile.
    async fn complete(&self, generation: u64, kind: Arc<K>) {
        let outcome = kind.fetch(self.source.as_ref()).await;

        let next = match outcome {
            Ok(data) => {
                tracing::debug!(resource = K::NAME, generation, "fetched from prediction service");
                ResourceState {
                    data,
                    loading: false,
                    using_remote: true,
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    resource = K::NAME,
                    generation,
                    error = %err,
                    "failed to fetch from prediction service, using fallback data"
                );
                ResourceState {
                    data: kind.fallback(),
                    loading: false,
                    using_remote: false,
                    error: K::OFFLINE_MESSAGE.map(str::to_owned),
                }
            }
        };

        let written = self.state.send_if_modified(|state| {
            if !self.is_mounted() || self.generation.load(Ordering::Acquire) != generation {
                return false;
            }
            *state = next;
            true
        });

        if !written {
            tracing::debug!(resource = K::NAME, generation, "discarding stale fetch result");
        }
    }
}

/// Resource hook: owns the state for one resource kind.
///
/// Dropping the `Resource` is the unmount: pending results are discarded.
pub struct Resource<K: ResourceKind> {
    inner: Arc<Inner<K>>,
}

impl<K: ResourceKind> Resource<K> {
    /// Create the hook in its initial state (fallback data, loading) without
    /// fetching. Call [`Resource::refresh`] to run the first cycle.
    pub fn new(kind: K, source: Arc<dyn DataSource>) -> Self {
        let initial = ResourceState {
            data: kind.fallback(),
            loading: true,
            using_remote: false,
            error: None,
        };
        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                source,
                kind: Mutex::new(Arc::new(kind)),
                state,
                generation: AtomicU64::new(0),
                mounted: AtomicBool::new(true),
            }),
        }
    }

    /// Create the hook and start its first fetch in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(kind: K, source: Arc<dyn DataSource>) -> Self {
        let resource = Self::new(kind, source);
        resource.refresh_in_background();
        resource
    }

    /// Run one fetch cycle and return the resulting snapshot.
    pub async fn refresh(&self) -> ResourceState<K::Data> {
        self.inner.load().await;
        self.snapshot()
    }

    /// Start a fetch cycle without waiting for it. The state reads `loading`
    /// on return.
    pub fn refresh_in_background(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let cycle = inner.begin();
        tokio::spawn(async move {
            if let Some((generation, kind)) = cycle {
                inner.complete(generation, kind).await;
            }
        })
    }

    /// Replace the kind's parameters (e.g. a limit). Refetches in the
    /// background when they changed; returns whether they did.
    pub fn set_kind(&self, kind: K) -> bool
    where
        K: PartialEq,
    {
        {
            let mut current = self.inner.kind.lock().unwrap_or_else(PoisonError::into_inner);
            if **current == kind {
                return false;
            }
            *current = Arc::new(kind);
        }
        self.refresh_in_background();
        true
    }

    /// Current parameters.
    pub fn kind(&self) -> Arc<K> {
        self.inner.kind()
    }

    pub fn snapshot(&self) -> ResourceState<K::Data> {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceState<K::Data>> {
        self.inner.state.subscribe()
    }

    /// Wait until no cycle is loading and return that snapshot.
    pub async fn settled(&self) -> ResourceState<K::Data> {
        let mut rx = self.subscribe();
        let settled = rx.wait_for(|state| !state.loading).await.map(|s| (*s).clone());
        settled.unwrap_or_else(|_| self.snapshot())
    }

    /// Explicit unmount; equivalent to dropping.
    pub fn unmount(self) {}
}

impl<K: ResourceKind> Drop for Resource<K> {
    fn drop(&mut self) {
        self.inner.mounted.store(false, Ordering::Release);
    }
}

impl<K: ResourceKind> core::fmt::Debug for Resource<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &K::NAME)
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}
