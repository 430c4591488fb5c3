//! Unidirectional data flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ StateStore ──→ selectors
//!    ↑                                               │
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a slice of application state
//! - **Intent**: user action or system event (e.g. a fetch completing)
//! - **Reducer**: pure function producing the next state from the
//!   previous one and an intent
//! - **StateStore**: thread-safe container replacing snapshots
//!   wholesale, read through selectors

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::AppState;
pub use store::StateStore;
