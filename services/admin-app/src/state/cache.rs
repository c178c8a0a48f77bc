//! Query result cache keyed by exact request parameters
//!
//! Entries are only ever replaced wholesale per key, never patched. Every
//! issued fetch gets a monotonic token; a completion with a superseded
//! token is rejected, so an out-of-date result can never overwrite a newer
//! one.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, V>,
    newest: HashMap<K, u64>,
    next_token: u64,
}

impl<K: Eq + Hash + Clone, V> QueryCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            newest: HashMap::new(),
            next_token: 0,
        }
    }

    /// Issue a fetch token for the given key, superseding any outstanding
    /// fetch for the same key.
    pub fn begin(&mut self, key: K) -> u64 {
        self.next_token += 1;
        self.newest.insert(key, self.next_token);
        self.next_token
    }

    /// True if `token` is still the newest fetch issued for `key`.
    pub fn is_current(&self, key: &K, token: u64) -> bool {
        self.newest.get(key) == Some(&token)
    }

    /// Store a completed fetch. Returns false (and stores nothing) when a
    /// newer fetch for the same key has been issued since.
    pub fn complete(&mut self, key: &K, token: u64, value: V) -> bool {
        if !self.is_current(key, token) {
            return false;
        }
        self.entries.insert(key.clone(), value);
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Drop all cached results. Outstanding tokens stay valid so in-flight
    /// completions are still reconciled correctly.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash + Clone, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_stores_current_fetch() {
        let mut cache: QueryCache<u32, &str> = QueryCache::new();
        let token = cache.begin(1);
        assert!(cache.complete(&1, token, "page one"));
        assert_eq!(cache.get(&1), Some(&"page one"));
    }

    #[test]
    fn superseded_fetch_is_rejected() {
        let mut cache: QueryCache<u32, &str> = QueryCache::new();
        let stale = cache.begin(1);
        let fresh = cache.begin(1);

        assert!(!cache.complete(&1, stale, "old"));
        assert_eq!(cache.get(&1), None);

        assert!(cache.complete(&1, fresh, "new"));
        assert_eq!(cache.get(&1), Some(&"new"));
    }

    #[test]
    fn out_of_order_completion_never_overwrites_newer_result() {
        let mut cache: QueryCache<u32, &str> = QueryCache::new();
        let stale = cache.begin(1);
        let fresh = cache.begin(1);

        assert!(cache.complete(&1, fresh, "new"));
        assert!(!cache.complete(&1, stale, "old"));
        assert_eq!(cache.get(&1), Some(&"new"));
    }

    #[test]
    fn keys_are_independent() {
        let mut cache: QueryCache<u32, &str> = QueryCache::new();
        let one = cache.begin(1);
        let two = cache.begin(2);

        assert!(cache.complete(&1, one, "p1"));
        assert!(cache.complete(&2, two, "p2"));
        assert_eq!(cache.get(&1), Some(&"p1"));
        assert_eq!(cache.get(&2), Some(&"p2"));
    }

    #[test]
    fn invalidate_all_clears_entries_but_keeps_tokens() {
        let mut cache: QueryCache<u32, &str> = QueryCache::new();
        let token = cache.begin(1);
        assert!(cache.complete(&1, token, "p1"));

        let pending = cache.begin(2);
        cache.invalidate_all();

        assert_eq!(cache.get(&1), None);
        assert!(cache.is_current(&2, pending));
        assert!(cache.complete(&2, pending, "p2"));
    }
}
