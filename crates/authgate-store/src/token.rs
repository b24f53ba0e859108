//! Dual access/refresh token store.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use authgate_core::config::token::TokenConfig;
use authgate_entity::TokenRecord;

use crate::sweeper::Sweeper;
use crate::ttl::TtlMap;

/// Owns the access-keyed and refresh-keyed token maps.
///
/// The two maps are logically one entity with two independent expiry
/// clocks: each holds the same [`TokenRecord`] under a different key and
/// evicts it according to its own TTL. Lookups are by opaque token
/// string only — there is deliberately no lookup by user ID or username.
///
/// Constructed once at process start and shared via `Arc`; TTLs cannot
/// be reconfigured afterwards.
#[derive(Debug, Clone)]
pub struct TokenStore {
    access: TtlMap<TokenRecord>,
    refresh: TtlMap<TokenRecord>,
    sweep_interval: Duration,
}

impl TokenStore {
    /// Creates a store with the configured default TTLs.
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            access: TtlMap::new(config.access_ttl()),
            refresh: TtlMap::new(config.refresh_ttl()),
            sweep_interval: config.sweep_interval(),
        }
    }

    /// Saves both views of a freshly minted record.
    ///
    /// The access entry is written first: access-token validation is the
    /// hot path and must never observe a refresh entry whose access
    /// counterpart is not yet visible.
    pub fn save_token(&self, record: &TokenRecord) {
        self.access
            .insert(record.access_token.clone(), record.clone());
        self.refresh
            .insert(record.refresh_token.clone(), record.clone());
        debug!(user_id = %record.user_id, "Token record saved");
    }

    /// Looks up a record by its access token.
    pub fn token_exists(&self, access_token: &str) -> Option<TokenRecord> {
        self.access.get(access_token)
    }

    /// Looks up a record by its refresh token.
    pub fn refresh_token_exists(&self, refresh_token: &str) -> Option<TokenRecord> {
        self.refresh.get(refresh_token)
    }

    /// Diagnostic dump of both maps: `(access view, refresh view)`.
    pub fn get_all(
        &self,
    ) -> (
        HashMap<String, TokenRecord>,
        HashMap<String, TokenRecord>,
    ) {
        (self.access.snapshot(), self.refresh.snapshot())
    }

    /// Spawns one sweep task per map. The caller stops the returned
    /// handles at shutdown.
    pub fn start_sweepers(&self) -> Vec<Sweeper> {
        vec![
            Sweeper::spawn(self.access.clone(), self.sweep_interval),
            Sweeper::spawn(self.refresh.clone(), self.sweep_interval),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};

    fn test_config(access_min: u64, refresh_min: u64) -> TokenConfig {
        TokenConfig {
            access_ttl_minutes: access_min,
            refresh_ttl_minutes: refresh_min,
            sweep_interval_seconds: 60,
        }
    }

    fn test_record(access: &str, refresh: &str) -> TokenRecord {
        let now = Utc::now();
        TokenRecord {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            user_id: "1".to_string(),
            username: "alice".to_string(),
            access_expires_at: now + ChronoDuration::minutes(15),
            refresh_expires_at: now + ChronoDuration::days(7),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_and_lookup_both_views() {
        let store = TokenStore::new(&test_config(15, 10080));
        let record = test_record("acc-1", "ref-1");
        store.save_token(&record);

        assert_eq!(store.token_exists("acc-1"), Some(record.clone()));
        assert_eq!(store.refresh_token_exists("ref-1"), Some(record));
        assert_eq!(store.token_exists("ref-1"), None);
        assert_eq!(store.refresh_token_exists("acc-1"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_expiry_clocks() {
        let store = TokenStore::new(&test_config(1, 10));
        let record = test_record("acc-2", "ref-2");
        store.save_token(&record);

        tokio::time::advance(std::time::Duration::from_secs(120)).await;

        assert_eq!(store.token_exists("acc-2"), None);
        assert_eq!(store.refresh_token_exists("ref-2"), Some(record));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_all_dumps_both_maps() {
        let store = TokenStore::new(&test_config(15, 10080));
        store.save_token(&test_record("acc-3", "ref-3"));
        store.save_token(&test_record("acc-4", "ref-4"));

        let (access, refresh) = store.get_all();
        assert_eq!(access.len(), 2);
        assert_eq!(refresh.len(), 2);
        assert!(access.contains_key("acc-3"));
        assert!(refresh.contains_key("ref-4"));
    }
}
