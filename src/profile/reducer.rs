use crate::flow::Reducer;
use crate::profile::intent::ProfileIntent;
use crate::profile::state::ProfileState;
use crate::remote::RemoteValue;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Reset => ProfileState::default(),
            ProfileIntent::LoadRequest => ProfileState {
                profile: RemoteValue::Loading,
                ..state
            },
            ProfileIntent::LoadSuccess(profile) => ProfileState {
                profile: RemoteValue::Ready(profile),
                ..state
            },
            ProfileIntent::LoadFailure(error) => ProfileState {
                profile: RemoteValue::Error(error),
                ..state
            },
            ProfileIntent::UpsertRequest(_) => ProfileState {
                upsert: RemoteValue::Loading,
                ..state
            },
            // The accepted upsert is the new truth: fold it back into
            // the loaded profile as well.
            ProfileIntent::UpsertSuccess(profile) => ProfileState {
                profile: RemoteValue::Ready(profile.clone()),
                upsert: RemoteValue::Ready(profile),
            },
            ProfileIntent::UpsertFailure(error) => ProfileState {
                upsert: RemoteValue::Error(error),
                ..state
            },
        }
    }
}
