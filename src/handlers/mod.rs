//! HTTP handlers for shopping entries.

pub mod entry;
pub use entry::*;
