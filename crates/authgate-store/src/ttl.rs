//! Generic expiring key-value map with lazy expiry on read.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// A stored value with its expiration deadline.
#[derive(Debug, Clone)]
struct TtlEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Expiring key-value map.
///
/// Every entry carries its own deadline, computed at insertion time as
/// `now + ttl`. The read-time deadline check is authoritative: an entry
/// whose deadline has passed is absent to callers even before the
/// periodic [`Sweeper`](crate::Sweeper) removes it. The sweep exists for
/// memory reclamation only.
///
/// All operations are safe for concurrent invocation; cloning is cheap
/// and shares the underlying table.
#[derive(Debug, Clone)]
pub struct TtlMap<V> {
    entries: Arc<DashMap<String, TtlEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone + Send + Sync + 'static> TtlMap<V> {
    /// Creates an empty map with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            default_ttl,
        }
    }

    /// Inserts or replaces the entry for `key`, expiring after the
    /// store's default TTL. Overwrites silently.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Inserts or replaces the entry for `key` with a per-entry TTL
    /// override.
    pub fn insert_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = TtlEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key.into(), entry);
    }

    /// Returns the live value for `key`, or `None` if the key is absent
    /// or its deadline has passed.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Returns whether a live entry exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of live entries. Expired-but-unswept entries are excluded.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    /// Returns whether the map holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Diagnostic dump of the table.
    ///
    /// May transiently include entries that have expired but have not
    /// yet been swept; [`get`](Self::get) is the source of truth for
    /// liveness.
    pub fn snapshot(&self) -> HashMap<String, V> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().value.clone()))
            .collect()
    }

    /// Removes every entry whose deadline has passed. Returns the number
    /// of entries removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_insert_get() {
        let map: TtlMap<String> = TtlMap::new(Duration::from_secs(60));
        map.insert("k1", "v1".to_string());
        assert_eq!(map.get("k1"), Some("v1".to_string()));
        assert_eq!(map.get("missing"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_replaces_value() {
        let map: TtlMap<u32> = TtlMap::new(Duration::from_secs(60));
        map.insert("k", 1);
        map.insert("k", 2);
        assert_eq!(map.get("k"), Some(2));
        assert_eq!(map.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lazy_expiry_on_read() {
        let map: TtlMap<u32> = TtlMap::new(Duration::from_secs(5));
        map.insert("k", 7);

        tokio::time::advance(Duration::from_secs(6)).await;

        // No sweep has run, but the deadline check makes it absent.
        assert_eq!(map.get("k"), None);
        assert!(!map.contains("k"));
        assert!(map.snapshot().contains_key("k"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_entry_ttl_overrides_default() {
        let map: TtlMap<u32> = TtlMap::new(Duration::from_secs(5));
        map.insert("short", 1);
        map.insert_with_ttl("long", 2, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(map.get("short"), None);
        assert_eq!(map.get("long"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_expired() {
        let map: TtlMap<u32> = TtlMap::new(Duration::from_secs(5));
        map.insert("a", 1);
        map.insert_with_ttl("b", 2, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(map.sweep(), 1);
        assert!(!map.snapshot().contains_key("a"));
        assert!(map.snapshot().contains_key("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_len_excludes_expired() {
        let map: TtlMap<u32> = TtlMap::new(Duration::from_secs(5));
        map.insert("a", 1);
        map.insert_with_ttl("b", 2, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());
    }
}
