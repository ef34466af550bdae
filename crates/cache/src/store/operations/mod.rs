//! Path-level store operations
//!
//! These assume the caller already holds the right access on the store's
//! queue; they do no synchronization of their own.

mod delete;
mod insert;
mod retrieve;

pub(super) use delete::delete;
pub(super) use insert::insert;
pub(super) use retrieve::retrieve;
