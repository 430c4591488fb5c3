use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a fetch failure, used by view resolution.
///
/// Anything a caller cannot name more precisely classifies as `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The resource does not exist on the remote side.
    NotFound,
    /// The remote side did not answer in time.
    Timeout,
    /// Any other failure.
    Generic,
}

/// Exposes the failure subkind of a domain error.
///
/// Callers with richer error types implement this so the view resolver
/// can classify them without knowing their shape.
pub trait FailureClass {
    fn failure_kind(&self) -> FailureKind;
}

/// Default error type for fetched resources.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    #[error("resource not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("fetch failed: {0}")]
    Generic(String),
}

impl FailureClass for FetchError {
    fn failure_kind(&self) -> FailureKind {
        match self {
            FetchError::NotFound => FailureKind::NotFound,
            FetchError::Timeout => FailureKind::Timeout,
            FetchError::Generic(_) => FailureKind::Generic,
        }
    }
}
