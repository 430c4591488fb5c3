//! Forced app-update gate.
//!
//! When the running version is no longer supported, the app shows an
//! update screen whose single action sends the user to the platform
//! store. Opening the store falls back through an ordered chain:
//! native URL, then web URL, then a transient error flag that clears
//! itself after a fixed interval.

mod gate;
mod intent;
mod reducer;
mod state;

pub use gate::{LaunchError, StoreLauncher, StoreOpenOutcome, UpdateGate};
pub use intent::UpdateIntent;
pub use reducer::UpdateReducer;
pub use state::UpdateModalState;
