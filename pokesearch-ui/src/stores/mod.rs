//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod search;

pub use search::*;
