//! Operation scheduling for a single store
//!
//! - **`queue`**: FIFO admission with shared/exclusive access
//! - **`completion`**: the handle through which each operation's result arrives

mod completion;
mod queue;

pub use completion::Completion;
pub(crate) use queue::{Access, SyncQueue};
