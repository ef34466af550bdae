//! Core domain types and errors for the feed cache store.
//!
//! ## Key Components
//!
//! - **`errors`**: The `StoreError` taxonomy every store operation reports
//!   through, its `ErrorKind` discriminant and the `Result` alias.
//! - **`types`**: The feed record (`FeedItem`), the persisted snapshot
//!   (`FeedSnapshot`) and the retrieval outcome (`CachedFeed`).

pub mod errors;
pub mod types;

pub use self::{
    errors::{ErrorKind, Result, StoreError},
    types::*,
};
