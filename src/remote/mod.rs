//! Lifecycle of a remotely fetched value.
//!
//! A `RemoteValue` is an immutable snapshot: the producing fetcher
//! replaces it wholesale on every transition, consumers only read it.
//! Valid transitions are `NotRequested → Loading → (Ready | Error)`,
//! with `Loading` reachable again from `Ready`/`Error` on re-fetch.

mod error;

pub use error::{FailureClass, FailureKind, FetchError};

use serde::{Deserialize, Serialize};

/// Result of an asynchronous fetch, tagged by lifecycle phase.
///
/// Exactly one case is active at any time. `NotRequested` is the
/// default so reducers can start from `Default::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum RemoteValue<V, E> {
    /// No fetch has been attempted yet.
    #[default]
    NotRequested,
    /// A fetch is in flight. Carries no payload.
    Loading,
    /// The fetch succeeded.
    Ready(V),
    /// The fetch failed.
    Error(E),
}

impl<V, E> RemoteValue<V, E> {
    /// True iff a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True iff the fetch succeeded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// True iff the fetch failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True once a fetch has been attempted, whatever its outcome.
    pub fn is_requested(&self) -> bool {
        !matches!(self, Self::NotRequested)
    }

    /// Success payload, if any.
    pub fn ready(&self) -> Option<&V> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Error payload, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Consume into the success payload, if any.
    pub fn into_ready(self) -> Option<V> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Success payload, or `default` for every other case.
    pub fn value_or(self, default: V) -> V {
        self.into_ready().unwrap_or(default)
    }

    /// Map the success payload, leaving the other cases untouched.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> RemoteValue<U, E> {
        match self {
            Self::NotRequested => RemoteValue::NotRequested,
            Self::Loading => RemoteValue::Loading,
            Self::Ready(value) => RemoteValue::Ready(f(value)),
            Self::Error(error) => RemoteValue::Error(error),
        }
    }

    /// Map the error payload, leaving the other cases untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteValue<V, F> {
        match self {
            Self::NotRequested => RemoteValue::NotRequested,
            Self::Loading => RemoteValue::Loading,
            Self::Ready(value) => RemoteValue::Ready(value),
            Self::Error(error) => RemoteValue::Error(f(error)),
        }
    }

    /// Collapse all four cases into a single value.
    pub fn fold<T>(
        self,
        not_requested: impl FnOnce() -> T,
        loading: impl FnOnce() -> T,
        ready: impl FnOnce(V) -> T,
        error: impl FnOnce(E) -> T,
    ) -> T {
        match self {
            Self::NotRequested => not_requested(),
            Self::Loading => loading(),
            Self::Ready(value) => ready(value),
            Self::Error(err) => error(err),
        }
    }
}
