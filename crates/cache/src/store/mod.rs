//! Disk-backed feed store
//!
//! One file, one snapshot, one dispatcher. The path-level operations in
//! `operations` do the I/O; the store schedules them on its queue.

mod builder;
mod operations;
mod trait_impl;
mod types;

pub use types::FeedCacheStore;

#[cfg(test)]
mod tests;
