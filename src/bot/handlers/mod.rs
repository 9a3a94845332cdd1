//! Discord interaction handlers
//!
//! Handlers for Discord interactions that are not commands themselves.

/// Autocomplete handlers for product ids, inquiry ids, categories, slots and subjects
pub mod autocomplete;
