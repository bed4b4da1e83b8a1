//! In-memory caching of fetched user details.
//!
//! This module provides the `DetailCache`, a session-scoped map from user id
//! to the detail record fetched for it. Entries are never evicted, refreshed
//! or overwritten; the recorded fetch time is used for display only.

pub mod details;

pub use details::{CachedData, DetailCache};
