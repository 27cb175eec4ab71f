//! In-memory response store.

use super::key::CacheKey;
use crate::types::HttpResponse;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Response store shared by every request that goes through one caching interceptor.
///
/// Readers get their own copy of a stored response. Writes (`insert`, `clear`)
/// are reserved to the caching interceptor and its TTL sweeper.
pub struct ResponseStore {
    entries: RwLock<HashMap<CacheKey, HttpResponse>>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a copy of the stored response.
    pub fn get(&self, key: &CacheKey) -> Option<HttpResponse> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last write wins.
    pub(crate) fn insert(&self, key: CacheKey, response: HttpResponse) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, response);
    }

    /// Drops every entry and returns how many there were.
    pub(crate) fn clear(&self) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let n = entries.len();
        entries.clear();
        n
    }
}

impl Default for ResponseStore {
    fn default() -> Self {
        Self::new()
    }
}
