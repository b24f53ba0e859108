//! Token issuance counters.

use std::sync::atomic::{AtomicU64, Ordering};

use authgate_core::traits::MetricsSink;

/// Lock-free counters for the auth subsystem.
#[derive(Debug)]
pub struct AuthMetrics {
    tokens_created: AtomicU64,
}

impl AuthMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self {
            tokens_created: AtomicU64::new(0),
        }
    }

    /// Returns a point-in-time snapshot of the counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tokens_created: self.tokens_created.load(Ordering::Relaxed),
        }
    }
}

impl Default for AuthMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for AuthMetrics {
    fn record_token_created(&self) {
        self.tokens_created.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time view of [`AuthMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total token pairs minted since startup.
    pub tokens_created: u64,
}
