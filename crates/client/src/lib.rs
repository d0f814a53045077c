//! `ecorp-client` — HTTP client for the prediction/analytics service.
//!
//! One GET per resource kind, JSON decoded and mapped into `ecorp-core`
//! records (date strings become `DateTime<Utc>`). No retries, no caching:
//! callers decide what to do with a failed fetch.

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod wire;

pub use client::{DEFAULT_LIMIT, MlServiceClient};
pub use config::{ConfigError, ServiceConfig};
pub use error::{FetchError, FetchResult};
pub use source::DataSource;
pub use wire::ServiceMetadata;
