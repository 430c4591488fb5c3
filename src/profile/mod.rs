//! User profile state: load and upsert lifecycle.
//!
//! The actual fetching lives outside this crate; a fetcher performs the
//! request and feeds the outcome back as an intent.

mod intent;
mod reducer;
mod state;
mod types;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::ProfileState;
pub use types::{Profile, ProfilePatch};
