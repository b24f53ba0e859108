//! Token minting and the refresh flow.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use authgate_core::config::TokenConfig;
use authgate_core::error::AppError;
use authgate_core::traits::MetricsSink;
use authgate_entity::{TokenRecord, UserIdentity};
use authgate_store::TokenStore;

use crate::generator::TokenGenerator;

/// Mints access/refresh token pairs and records them in the store.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    store: Arc<TokenStore>,
    generator: TokenGenerator,
    metrics: Arc<dyn MetricsSink>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Creates an issuer writing to `store` with lifetimes from `config`.
    pub fn new(
        store: Arc<TokenStore>,
        generator: TokenGenerator,
        metrics: Arc<dyn MetricsSink>,
        config: &TokenConfig,
    ) -> Self {
        Self {
            store,
            generator,
            metrics,
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: Duration::minutes(config.refresh_ttl_minutes as i64),
        }
    }

    /// Issues a fresh token pair for an already-verified identity.
    pub fn issue(&self, identity: &UserIdentity) -> TokenRecord {
        let record = self.mint(&identity.id, &identity.username);
        info!(
            user_id = %identity.id,
            username = %identity.username,
            "Issued token pair"
        );
        record
    }

    /// Exchanges a live refresh token for a brand-new token pair.
    ///
    /// The presented refresh token stays valid until its own expiry;
    /// refreshing adds a pair rather than rotating the old one out.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenRecord, AppError> {
        let prior = self
            .store
            .refresh_token_exists(refresh_token)
            .ok_or_else(|| AppError::not_found("Refresh token is unknown or expired"))?;

        let record = self.mint(&prior.user_id, &prior.username);
        info!(
            user_id = %prior.user_id,
            username = %prior.username,
            "Refreshed token pair"
        );
        Ok(record)
    }

    fn mint(&self, user_id: &str, username: &str) -> TokenRecord {
        let access_token = self.generator.generate();
        let mut refresh_token = self.generator.generate();
        // The pair must be distinct; regenerate on collision.
        while refresh_token == access_token {
            refresh_token = self.generator.generate();
        }

        let now = Utc::now();
        let record = TokenRecord {
            access_token,
            refresh_token,
            user_id: user_id.to_string(),
            username: username.to_string(),
            access_expires_at: now + self.access_ttl,
            refresh_expires_at: now + self.refresh_ttl,
        };

        self.store.save_token(&record);
        self.metrics.record_token_created();
        record
    }
}
