//! Container state for the user directory.
//!
//! `Directory` owns the user list, the current selection and the
//! `DetailLoader`. Selection flows down into the loader; the front end only
//! reports which summary was chosen.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::detail::{DetailLoader, DetailRequest, DetailResponse, DetailState};
use crate::messages::Messages;
use crate::models::UserSummary;

/// Status of the one-time user list load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Failed(String),
    Ready(Vec<UserSummary>),
}

pub struct Directory {
    list: ListState,
    list_requested: bool,
    selected: Option<UserSummary>,
    detail: DetailLoader,
    messages: Messages,
}

impl Directory {
    pub fn new(messages: Messages) -> Self {
        Self {
            list: ListState::Loading,
            list_requested: false,
            selected: None,
            detail: DetailLoader::new(messages),
            messages,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    /// Loaded users, empty until the list is ready
    pub fn users(&self) -> &[UserSummary] {
        match &self.list {
            ListState::Ready(users) => users,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&UserSummary> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|u| u.id)
    }

    pub fn detail_state(&self) -> &DetailState {
        self.detail.state()
    }

    pub fn detail_loader(&self) -> &DetailLoader {
        &self.detail
    }

    /// Claim the list load. Returns true only the first time it is called,
    /// so the list endpoint is hit at most once per directory.
    pub fn begin_list_load(&mut self) -> bool {
        if self.list_requested {
            debug!("User list load already started");
            return false;
        }
        self.list_requested = true;
        true
    }

    pub fn finish_list_load(&mut self, result: Result<Vec<UserSummary>>) {
        self.list = match result {
            Ok(users) => {
                info!(count = users.len(), "User list loaded");
                ListState::Ready(users)
            }
            Err(e) => {
                warn!(error = ?e, "Failed to load user list");
                ListState::Failed(self.messages.list_error.to_string())
            }
        };
    }

    /// Change the selection. Returns a detail request when a fetch is needed.
    pub fn select(&mut self, user: Option<UserSummary>) -> Option<DetailRequest> {
        if !matches!(self.list, ListState::Ready(_)) {
            debug!("Ignoring selection before the user list is ready");
            return None;
        }
        if self.selected_id() == user.as_ref().map(|u| u.id) {
            return None;
        }
        self.selected = user;
        self.detail.select(self.selected.as_ref())
    }

    /// Select the user at `index` in the list order
    pub fn select_index(&mut self, index: usize) -> Option<DetailRequest> {
        let user = self.users().get(index).cloned()?;
        self.select(Some(user))
    }

    pub fn clear_selection(&mut self) -> Option<DetailRequest> {
        self.select(None)
    }

    pub fn complete_detail(&mut self, response: DetailResponse) -> bool {
        self.detail.complete(response)
    }
}
