use crate::flow::Reducer;
use crate::update::intent::UpdateIntent;
use crate::update::state::UpdateModalState;

pub struct UpdateReducer;

impl Reducer for UpdateReducer {
    type State = UpdateModalState;
    type Intent = UpdateIntent;

    // Both intents fully determine the next state. ErrorExpired is a
    // no-op on Idle, so a stale timer firing late cannot do harm.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UpdateIntent::OpenFailed => UpdateModalState::Failed,
            UpdateIntent::ErrorExpired => UpdateModalState::Idle,
        }
    }
}
