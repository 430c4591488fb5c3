use crate::flow::AppState;
use crate::profile::types::Profile;
use crate::remote::{FetchError, RemoteValue};

/// Profile slice: the loaded profile plus the upsert in flight.
///
/// Both fields are full `RemoteValue` lifecycles so consumers can show
/// a spinner for the initial load and a separate one for a pending
/// update without conflating the two.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: RemoteValue<Profile, FetchError>,
    pub upsert: RemoteValue<Profile, FetchError>,
}

impl AppState for ProfileState {}

impl ProfileState {
    pub fn is_upserting(&self) -> bool {
        self.upsert.is_loading()
    }
}
