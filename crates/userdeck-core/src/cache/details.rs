use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::UserDetail;

#[derive(Debug, Clone)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        let now = Utc::now();
        (now - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew (negative ages)
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// Session-scoped user id → detail lookup table.
///
/// Single owner, append-only. `insert` keeps the first record stored for an
/// id, so repeated inserts for the same id are harmless.
#[derive(Debug, Default)]
pub struct DetailCache {
    entries: HashMap<i64, CachedData<Arc<UserDetail>>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Option<Arc<UserDetail>> {
        self.entries.get(&user_id).map(|cached| Arc::clone(&cached.data))
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.entries.contains_key(&user_id)
    }

    /// Store a fetched record unless one is already present, returning the
    /// entry that the cache holds afterwards.
    pub fn insert(&mut self, user_id: i64, detail: UserDetail) -> Arc<UserDetail> {
        let entry = self.entries.entry(user_id).or_insert_with(|| {
            debug!(user_id, "Caching user detail");
            CachedData::new(Arc::new(detail))
        });
        Arc::clone(&entry.data)
    }

    /// Human readable age of the entry, e.g. "5m ago"
    pub fn age_display(&self, user_id: i64) -> Option<String> {
        self.entries.get(&user_id).map(|cached| cached.age_display())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
