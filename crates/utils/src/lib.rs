//! Shared utilities for feedstore
//!
//! File replacement and tracing setup used by the store and its tests.

pub mod atomic_file;
pub mod tracing;

pub use atomic_file::*;
