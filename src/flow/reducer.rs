//! Reducer trait: the only place state transitions happen.

use super::intent::Intent;
use super::state::AppState;

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: (State, Intent) -> State.
/// Side effects (fetching, opening URLs) live in collaborators that
/// feed intents back in.
pub trait Reducer {
    /// The state slice this reducer operates on.
    type State: AppState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
