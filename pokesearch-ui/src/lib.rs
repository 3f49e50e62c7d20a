//! pokesearch-ui - UI types and components for pokesearch
//!
//! Contains the search store and pure, props-based view components.
//! Data fetching lives in the app crate.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
