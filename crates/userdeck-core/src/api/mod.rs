//! REST client for the user directory endpoints.
//!
//! Two read-only JSON resources are served from a common base URL:
//! the user list (`users.json`) and one detail document per user
//! (`{id}.json`). There is no authentication and nothing is written.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
