use crate::flow::Intent;

#[derive(Debug, Clone, Copy)]
pub enum UpdateIntent {
    /// Every URL in the fallback chain failed to open.
    OpenFailed,
    /// The transient error interval elapsed.
    ErrorExpired,
}

impl Intent for UpdateIntent {}
