//! Application context configuration.
//!
//! App metadata and store URLs are explicit values passed to the
//! components that need them, not ambient globals looked up at call
//! sites.

mod loader;
mod types;

pub use loader::ContextError;
pub use types::{AppContext, StoreUrls};
