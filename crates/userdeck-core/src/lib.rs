//! Core library for userdeck.
//!
//! This crate holds everything that does not touch the terminal:
//!
//! - `api`: HTTP client for the user list and user detail endpoints
//! - `models`: `UserSummary` and `UserDetail`
//! - `source`: the `UserSource` seam the loaders fetch through
//! - `cache`: the per-session detail cache
//! - `detail`: the detail loader state machine with request correlation
//! - `directory`: the container state (list, selection, detail loader)
//! - `config`, `messages`: configuration and localized UI strings

pub mod api;
pub mod cache;
pub mod config;
pub mod detail;
pub mod directory;
pub mod messages;
pub mod models;
pub mod source;

pub use api::{ApiClient, ApiError};
pub use cache::{CachedData, DetailCache};
pub use config::{Config, Locale};
pub use detail::{DetailLoader, DetailRequest, DetailResponse, DetailState};
pub use directory::{Directory, ListState};
pub use messages::Messages;
pub use models::{UserDetail, UserSummary};
pub use source::UserSource;
