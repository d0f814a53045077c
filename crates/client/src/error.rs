use ecorp_core::DomainError;
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// A remote fetch failed.
///
/// Variants exist for logs and diagnostics only; consumers are expected to
/// treat every variant the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset mid-body, etc.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not the expected JSON shape or held unparseable values.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<DomainError> for FetchError {
    fn from(err: DomainError) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
