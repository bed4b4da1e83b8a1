//! The seam between the loaders and the network.
//!
//! `DetailRequest::run` and the list load go through `UserSource` so the
//! front end can hold an `Arc<dyn UserSource>` and tests can count calls.

use anyhow::Result;
use async_trait::async_trait;

use crate::api::ApiClient;
use crate::models::{UserDetail, UserSummary};

/// Read-only access to the user directory.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user summary.
    async fn fetch_users(&self) -> Result<Vec<UserSummary>>;

    /// Fetch the detail record for one user.
    async fn fetch_user_detail(&self, user_id: i64) -> Result<UserDetail>;
}

#[async_trait]
impl UserSource for ApiClient {
    async fn fetch_users(&self) -> Result<Vec<UserSummary>> {
        ApiClient::fetch_users(self).await
    }

    async fn fetch_user_detail(&self, user_id: i64) -> Result<UserDetail> {
        ApiClient::fetch_user_detail(self, user_id).await
    }
}
