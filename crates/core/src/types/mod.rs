//! Feed domain types.
//!
//! - **`feed`**: the caller-supplied record and the snapshot the store persists
//! - **`cached`**: what a retrieve hands back

pub mod cached;
pub mod feed;

pub use cached::*;
pub use feed::*;
