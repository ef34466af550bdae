//! Error types for feed store operations

mod builders;
mod recovery;
mod types;

pub use types::{ErrorKind, Result, StoreError};
