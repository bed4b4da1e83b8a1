//! API client for the user directory endpoints.
//!
//! This module provides the `ApiClient` struct for fetching the user list
//! and individual user detail documents.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::user::UserDetailResponse;
use crate::models::{UserDetail, UserSummary};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default base URL serving `users.json` and `{id}.json`
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/netology-code/ra16-homeworks/master/hooks-context/use-effect/data";

/// Path of the user list document under the base URL
const USERS_PATH: &str = "users.json";

/// HTTP request timeout in seconds.
/// Static JSON files normally arrive well within this.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the user directory.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the default endpoints
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_url(&self) -> String {
        format!("{}/{}", self.base_url, USERS_PATH)
    }

    pub fn user_detail_url(&self, user_id: i64) -> String {
        format!("{}/{}.json", self.base_url, user_id)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response)
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        // raw.githubusercontent.com serves JSON as text/plain, so decode the body
        // ourselves instead of relying on the content type.
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Data Fetching Methods =====

    /// Fetch the list of user summaries
    pub async fn fetch_users(&self) -> Result<Vec<UserSummary>> {
        let users: Vec<UserSummary> = self.get(&self.users_url()).await?;
        debug!(count = users.len(), "Fetched user list");
        Ok(users)
    }

    /// Fetch the detail document for one user
    pub async fn fetch_user_detail(&self, user_id: i64) -> Result<UserDetail> {
        let url = self.user_detail_url(user_id);
        let response: UserDetailResponse = self.get(&url).await?;
        let detail = response.into_detail();
        if detail.id != user_id {
            // The document is keyed by its URL; a mismatched id is worth noting but not fatal
            debug!(requested = user_id, received = detail.id, "Detail id differs from requested id");
        }
        Ok(detail)
    }
}
