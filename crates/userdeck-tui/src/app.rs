//! Application state management for userdeck.
//!
//! This module contains the `App` struct that ties the `Directory` to the
//! terminal: it owns the UI state (focus, cursor, overlays) and runs list and
//! detail fetches on background tasks, applying their results on the UI loop.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use userdeck_core::{
    ApiClient, Config, DetailRequest, DetailResponse, Directory, Messages, UserSource,
    UserSummary,
};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// One list load plus a detail fetch per selection keeps this mostly empty.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Number of rows to move on page up/down
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Current UI focus area (list panel or detail panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Results sent from background fetch tasks back to the UI loop.
enum FetchResult {
    /// Outcome of the one-time user list load
    Users(Result<Vec<UserSummary>>),
    /// Outcome of a detail fetch, tagged with its request token
    Detail(DetailResponse),
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    // UI State
    pub state: AppState,
    pub focus: Focus,
    /// Row under the cursor in the user list
    pub cursor: usize,
    pub status_message: Option<String>,

    pub directory: Directory,

    source: Arc<dyn UserSource>,

    // Background task channel
    fetch_rx: mpsc::Receiver<FetchResult>,
    fetch_tx: mpsc::Sender<FetchResult>,
}

impl App {
    /// Create an application talking to the configured endpoints
    pub fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::with_base_url(config.base_url(), config.request_timeout())?;
        debug!(base_url = api.base_url(), "API client configured");
        Ok(Self::with_source(
            Arc::new(api),
            Messages::for_locale(config.locale),
        ))
    }

    pub fn with_source(source: Arc<dyn UserSource>, messages: Messages) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            state: AppState::Normal,
            focus: Focus::List,
            cursor: 0,
            status_message: None,
            directory: Directory::new(messages),
            source,
            fetch_rx: rx,
            fetch_tx: tx,
        }
    }

    pub fn messages(&self) -> &Messages {
        self.directory.messages()
    }

    // =========================================================================
    // Background Fetching
    // =========================================================================

    async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
        if tx.send(result).await.is_err() {
            warn!("Failed to send fetch result - receiver dropped");
        }
    }

    /// Start the user list load in the background. Only the first call fetches.
    pub fn load_users(&mut self) {
        if !self.directory.begin_list_load() {
            return;
        }
        info!("Loading user list");

        let source = Arc::clone(&self.source);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_users().await;
            Self::send_result(&tx, FetchResult::Users(result)).await;
        });
    }

    fn spawn_detail_fetch(&self, request: DetailRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let response = request.run(source.as_ref()).await;
            Self::send_result(&tx, FetchResult::Detail(response)).await;
        });
    }

    /// Check for completed background tasks and apply their results
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.fetch_rx.try_recv() {
            self.process_fetch_result(result);
        }
    }

    /// Wait for the next background result and apply it
    #[cfg(test)]
    pub async fn next_background_result(&mut self) {
        if let Some(result) = self.fetch_rx.recv().await {
            self.process_fetch_result(result);
        }
    }

    fn process_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Users(result) => {
                self.directory.finish_list_load(result);
                self.cursor = 0;
                let count = self.directory.users().len();
                if count > 0 {
                    self.status_message = Some(format!("Loaded {} users", count));
                }
            }
            FetchResult::Detail(response) => {
                let user_id = response.request.user_id;
                if !self.directory.complete_detail(response) {
                    debug!(user_id, "Stale detail result ignored");
                }
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selection callback for the user list
    pub fn select_user(&mut self, user: Option<UserSummary>) {
        self.status_message = None;
        if let Some(request) = self.directory.select(user) {
            self.spawn_detail_fetch(request);
        }
    }

    /// Select the row under the cursor
    pub fn select_cursor(&mut self) {
        let user = self.directory.users().get(self.cursor).cloned();
        if user.is_some() {
            self.select_user(user);
        }
    }

    pub fn clear_selection(&mut self) {
        self.select_user(None);
    }

    // =========================================================================
    // Cursor Movement
    // =========================================================================

    pub fn move_cursor_down(&mut self, rows: usize) {
        let last = self.directory.users().len().saturating_sub(1);
        self.cursor = (self.cursor + rows).min(last);
    }

    pub fn move_cursor_up(&mut self, rows: usize) {
        self.cursor = self.cursor.saturating_sub(rows);
    }

    pub fn cursor_to_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_last(&mut self) {
        self.cursor = self.directory.users().len().saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Detail,
            Focus::Detail => Focus::List,
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
