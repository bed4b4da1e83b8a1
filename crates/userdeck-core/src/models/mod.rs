//! Data models for the user directory.
//!
//! - `UserSummary`: id and name, as returned by the list endpoint
//! - `UserDetail`: the full profile shown in the detail pane

pub mod user;

pub use user::{UserDetail, UserSummary};
