use crate::flow::Intent;
use crate::profile::types::{Profile, ProfilePatch};
use crate::remote::FetchError;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Drop everything back to the pre-load state.
    Reset,
    /// A profile load was started by the fetcher.
    LoadRequest,
    LoadSuccess(Profile),
    LoadFailure(FetchError),
    /// An upsert was started. The patch payload is consumed by the
    /// fetcher; the reducer only records that an upsert is in flight.
    UpsertRequest(ProfilePatch),
    UpsertSuccess(Profile),
    UpsertFailure(FetchError),
}

impl Intent for ProfileIntent {}
