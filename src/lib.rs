//! State-selection core for an asynchronous client application.
//!
//! This crate models the lifecycle of remotely fetched resources and
//! derives UI decisions from them, without doing any fetching or
//! rendering itself.
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──→ Intent ──→ Reducer ──→ State (RemoteValue) ──→ Resolver ──→ Branch tag
//!                                        │                                    │
//!                                        └── StateStore (selector reads) ─────┘
//! ```
//!
//! - [`remote::RemoteValue`]: closed sum type over an async fetch
//!   (not requested / loading / ready / error).
//! - [`view::resolve_search_view`]: pure, total mapping from a fetched
//!   collection to the sub-view that should be rendered.
//! - [`flow`]: unidirectional data flow primitives and the snapshot store.
//! - [`profile`]: load/upsert lifecycle for the user profile.
//! - [`update`]: app-update gate with store-open fallback chain.
//! - [`config`]: explicit application context (no ambient globals).

pub mod config;
pub mod flow;
pub mod profile;
pub mod remote;
pub mod update;
pub mod view;
