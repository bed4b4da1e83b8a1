//! Detail loader for the selected user.
//!
//! `DetailLoader` turns selection changes into one of four states (empty,
//! loading, failed, loaded) and decides when a network fetch is needed.
//! Fetches themselves happen elsewhere: `select` hands out a `DetailRequest`
//! token, the caller runs it (usually on a background task) and feeds the
//! `DetailResponse` back through `complete`. Only the response for the most
//! recent request may change the state; anything older is stale.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::cache::DetailCache;
use crate::messages::Messages;
use crate::models::{UserDetail, UserSummary};
use crate::source::UserSource;

/// What the detail pane should show
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No user selected
    Empty,
    /// Fetch in flight for this user
    Loading { user_id: i64 },
    /// Fetch failed; `message` is user-facing
    Failed { user_id: i64, message: String },
    /// Detail available (shared with the cache entry)
    Loaded(Arc<UserDetail>),
}

/// Correlation token for one detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest {
    pub user_id: i64,
    pub seq: u64,
}

impl DetailRequest {
    /// Perform the fetch and pair the outcome with this request.
    pub async fn run(self, source: &dyn UserSource) -> DetailResponse {
        let result = source.fetch_user_detail(self.user_id).await;
        DetailResponse { request: self, result }
    }
}

/// Outcome of a `DetailRequest`
#[derive(Debug)]
pub struct DetailResponse {
    pub request: DetailRequest,
    pub result: Result<UserDetail>,
}

pub struct DetailLoader {
    cache: DetailCache,
    state: DetailState,
    pending: Option<DetailRequest>,
    next_seq: u64,
    messages: Messages,
}

impl DetailLoader {
    pub fn new(messages: Messages) -> Self {
        Self {
            cache: DetailCache::new(),
            state: DetailState::Empty,
            pending: None,
            next_seq: 1,
            messages,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// The request whose response is currently awaited, if any
    pub fn pending(&self) -> Option<DetailRequest> {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// React to a selection change. Returns a request when a fetch is needed.
    pub fn select(&mut self, selection: Option<&UserSummary>) -> Option<DetailRequest> {
        // Any earlier in-flight request is superseded from here on
        self.pending = None;

        let Some(user) = selection else {
            self.state = DetailState::Empty;
            return None;
        };

        if let Some(detail) = self.cache.get(user.id) {
            debug!(user_id = user.id, "Detail served from cache");
            self.state = DetailState::Loaded(detail);
            return None;
        }

        let request = DetailRequest {
            user_id: user.id,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(request);
        self.state = DetailState::Loading { user_id: user.id };
        debug!(user_id = user.id, seq = request.seq, "Detail fetch requested");
        Some(request)
    }

    /// Apply a fetch outcome. Returns false when the response was stale and
    /// the state was left alone.
    ///
    /// A stale success for the user the pending request is waiting on settles
    /// that request early: the pane shows the cached entry and the later
    /// response is then stale too.
    pub fn complete(&mut self, response: DetailResponse) -> bool {
        let DetailResponse { request, result } = response;

        if self.pending != Some(request) {
            debug!(
                user_id = request.user_id,
                seq = request.seq,
                pending_seq = ?self.pending.map(|p| p.seq),
                "Discarding stale detail response"
            );
            // The payload is still correct for its own id
            let Ok(detail) = result else {
                return false;
            };
            let cached = self.cache.insert(request.user_id, detail);
            if self.pending.map(|p| p.user_id) == Some(request.user_id) {
                debug!(user_id = request.user_id, "Pending request settled by earlier response");
                self.pending = None;
                self.state = DetailState::Loaded(cached);
                return true;
            }
            return false;
        }

        self.pending = None;
        self.state = match result {
            Ok(detail) => DetailState::Loaded(self.cache.insert(request.user_id, detail)),
            Err(e) => {
                warn!(user_id = request.user_id, error = ?e, "Failed to load user detail");
                DetailState::Failed {
                    user_id: request.user_id,
                    message: self.messages.detail_error.to_string(),
                }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::{detail, summary, FakeSource};
    use anyhow::anyhow;

    fn loader() -> DetailLoader {
        DetailLoader::new(Messages::english())
    }

    async fn select_and_run(loader: &mut DetailLoader, source: &FakeSource, user: &UserSummary) {
        if let Some(request) = loader.select(Some(user)) {
            let response = request.run(source).await;
            loader.complete(response);
        }
    }

    #[tokio::test]
    async fn test_anna_scenario() {
        let anna = summary(1, "Anna");
        let source = FakeSource::with_users(vec![anna.clone(), summary(2, "Bob")]);
        source.add_detail(UserDetail {
            id: 1,
            name: "Anna".to_string(),
            avatar_url: "a.png".to_string(),
            city: "Riga".to_string(),
            company: "Acme".to_string(),
            position: "Eng".to_string(),
        });
        let mut loader = loader();

        let request = loader.select(Some(&anna)).expect("first selection should fetch");
        assert_eq!(request.user_id, 1);
        assert_eq!(loader.state(), &DetailState::Loading { user_id: 1 });

        assert!(loader.complete(request.run(&source).await));
        match loader.state() {
            DetailState::Loaded(d) => {
                assert_eq!(d.city, "Riga");
                assert_eq!(d.company, "Acme");
                assert_eq!(d.position, "Eng");
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert_eq!(source.detail_calls_for(1), 1);

        // Re-selecting issues no further fetch
        assert!(loader.select(Some(&anna)).is_none());
        assert_eq!(source.total_detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_cached_selection_returns_identical_record() {
        let source = FakeSource::default();
        source.add_detail(detail(3, "Cleo", "Oslo"));
        let cleo = summary(3, "Cleo");
        let mut loader = loader();

        select_and_run(&mut loader, &source, &cleo).await;
        let first = match loader.state() {
            DetailState::Loaded(d) => Arc::clone(d),
            other => panic!("expected Loaded, got {:?}", other),
        };

        loader.select(None);
        assert!(loader.select(Some(&cleo)).is_none());
        match loader.state() {
            DetailState::Loaded(d) => assert!(Arc::ptr_eq(d, &first)),
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert_eq!(source.detail_calls_for(3), 1);
    }

    #[tokio::test]
    async fn test_selection_sequences_never_refetch_cached_ids() {
        let source = FakeSource::default();
        for (id, name) in [(1, "Anna"), (2, "Bob"), (3, "Cleo")] {
            source.add_detail(detail(id, name, "Riga"));
        }
        let users = [summary(1, "Anna"), summary(2, "Bob"), summary(3, "Cleo")];
        let mut loader = loader();

        for index in [0, 1, 0, 2, 2, 1, 0, 2, 1] {
            select_and_run(&mut loader, &source, &users[index]).await;
        }

        for id in 1..=3 {
            assert_eq!(source.detail_calls_for(id), 1, "user {} fetched more than once", id);
        }
        assert_eq!(loader.cache().len(), 3);
    }

    #[test]
    fn test_null_selection_is_empty_and_leaves_cache_alone() {
        let mut loader = loader();
        let anna = summary(1, "Anna");

        // From loading
        let request = loader.select(Some(&anna)).expect("should fetch");
        assert!(loader.select(None).is_none());
        assert_eq!(loader.state(), &DetailState::Empty);
        assert!(!loader.is_loading());

        // From failed
        let request2 = loader.select(Some(&anna)).expect("should fetch");
        loader.complete(DetailResponse { request: request2, result: Err(anyhow!("boom")) });
        assert!(matches!(loader.state(), DetailState::Failed { .. }));
        loader.select(None);
        assert_eq!(loader.state(), &DetailState::Empty);
        assert!(loader.cache().is_empty());

        // The response for the first request arrives late and must not revive it
        assert!(!loader.complete(DetailResponse { request, result: Ok(detail(1, "Anna", "Riga")) }));
        assert_eq!(loader.state(), &DetailState::Empty);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached_and_list_of_others_survives() {
        let source = FakeSource::default();
        source.add_detail(detail(3, "Cleo", "Oslo"));
        let cleo = summary(3, "Cleo");
        let gus = summary(7, "Gus");
        let mut loader = loader();

        select_and_run(&mut loader, &source, &cleo).await;
        select_and_run(&mut loader, &source, &gus).await;

        assert_eq!(
            loader.state(),
            &DetailState::Failed {
                user_id: 7,
                message: Messages::english().detail_error.to_string()
            }
        );
        assert!(!loader.cache().contains(7));
        assert!(!loader.is_loading());

        // Cached user still served without a fetch
        assert!(loader.select(Some(&cleo)).is_none());
        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.id == 3));

        // A failed id is fetched again on the next attempt
        source.add_detail(detail(7, "Gus", "Kyiv"));
        select_and_run(&mut loader, &source, &gus).await;
        assert_eq!(source.detail_calls_for(7), 2);
        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.city == "Kyiv"));
    }

    #[tokio::test]
    async fn test_stale_response_does_not_override_newer_selection() {
        let source = FakeSource::default();
        source.add_detail(detail(1, "Anna", "Riga"));
        source.add_detail(detail(2, "Bob", "Vilnius"));
        let mut loader = loader();

        let first = loader.select(Some(&summary(1, "Anna"))).expect("should fetch");
        let second = loader.select(Some(&summary(2, "Bob"))).expect("should fetch");
        assert!(second.seq > first.seq);

        // Responses arrive out of order
        let second_response = second.run(&source).await;
        let first_response = first.run(&source).await;

        assert!(loader.complete(second_response));
        assert!(!loader.complete(first_response));
        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.id == 2));

        // The stale payload was still good for user 1
        assert!(loader.cache().contains(1));
        assert!(loader.select(Some(&summary(1, "Anna"))).is_none());
        assert_eq!(source.detail_calls_for(1), 1);
    }

    #[test]
    fn test_stale_response_while_newer_fetch_in_flight() {
        let mut loader = loader();
        let first = loader.select(Some(&summary(1, "Anna"))).expect("should fetch");
        let second = loader.select(Some(&summary(2, "Bob"))).expect("should fetch");

        // Stale failure arrives first: still loading user 2
        assert!(!loader.complete(DetailResponse { request: first, result: Err(anyhow!("boom")) }));
        assert_eq!(loader.state(), &DetailState::Loading { user_id: 2 });
        assert_eq!(loader.pending(), Some(second));
    }

    #[test]
    fn test_reselecting_same_uncached_user_supersedes_earlier_request() {
        let mut loader = loader();
        let anna = summary(1, "Anna");
        let first = loader.select(Some(&anna)).expect("should fetch");
        loader.select(Some(&summary(2, "Bob")));
        let third = loader.select(Some(&anna)).expect("should fetch again");
        assert_ne!(first, third);

        // The earlier response for Anna settles the pending request for Anna
        assert!(loader.complete(DetailResponse { request: first, result: Ok(detail(1, "Anna", "Riga")) }));
        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.city == "Riga"));
        assert!(!loader.is_loading());

        // The response for `third` is now stale and the cache keeps the first entry
        assert!(!loader.complete(DetailResponse { request: third, result: Ok(detail(1, "Anna", "Tallinn")) }));
        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.city == "Riga"));
    }

    #[test]
    fn test_failure_after_earlier_success_for_same_user_keeps_loaded() {
        let mut loader = loader();
        let anna = summary(1, "Anna");
        let first = loader.select(Some(&anna)).expect("should fetch");
        loader.select(Some(&summary(2, "Bob")));
        let third = loader.select(Some(&anna)).expect("should fetch again");

        assert!(loader.complete(DetailResponse { request: first, result: Ok(detail(1, "Anna", "Riga")) }));
        assert!(!loader.complete(DetailResponse { request: third, result: Err(anyhow!("Status 500")) }));

        assert!(matches!(loader.state(), DetailState::Loaded(d) if d.id == 1 && d.city == "Riga"));
        assert!(loader.cache().contains(1));
    }

    #[test]
    fn test_stale_success_for_other_user_leaves_pending_alone() {
        let mut loader = loader();
        let first = loader.select(Some(&summary(1, "Anna"))).expect("should fetch");
        let second = loader.select(Some(&summary(2, "Bob"))).expect("should fetch");

        assert!(!loader.complete(DetailResponse { request: first, result: Ok(detail(1, "Anna", "Riga")) }));
        assert_eq!(loader.state(), &DetailState::Loading { user_id: 2 });
        assert_eq!(loader.pending(), Some(second));
    }
}
