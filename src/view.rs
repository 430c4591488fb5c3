//! View resolution for searched collections.
//!
//! Maps the lifecycle of a fetched collection to the sub-view that
//! should be rendered. The resolver only produces a branch tag; view
//! selection and mounting belong to the caller.

use crate::remote::{FailureClass, FailureKind, RemoteValue};

/// Branch tag naming which sub-view to render for a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView {
    /// Nothing matched: dedicated "not found" screen.
    NotFound,
    /// The search timed out: dedicated timeout screen.
    Timeout,
    /// Still waiting, or failed in a retryable way: loading screen.
    Loading,
    /// Items are available to show.
    Success,
}

/// Resolve the sub-view for a fetched collection.
///
/// Ordered decision list, first matching rule wins. The order is a
/// contract: an empty `Ready` payload must resolve to `NotFound` before
/// the success check runs, and a `NotFound` error must win over the
/// generic error handling below it.
///
/// Unknown error subkinds classify as `Generic` and land on the
/// `Loading` branch, so the resolver never fails: the worst outcome is
/// waiting on the retryable loading screen.
pub fn resolve_search_view<T, E>(value: &RemoteValue<Vec<T>, E>) -> SearchView
where
    E: FailureClass,
{
    match value {
        RemoteValue::Error(e) if e.failure_kind() == FailureKind::NotFound => SearchView::NotFound,
        RemoteValue::Ready(items) if items.is_empty() => SearchView::NotFound,
        RemoteValue::Error(e) if e.failure_kind() == FailureKind::Timeout => SearchView::Timeout,
        RemoteValue::Loading | RemoteValue::Error(_) => SearchView::Loading,
        RemoteValue::NotRequested | RemoteValue::Ready(_) => SearchView::Success,
    }
}
