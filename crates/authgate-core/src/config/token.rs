//! Token TTL and sweep configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token store configuration.
///
/// TTLs are fixed at process start; the store does not support runtime
/// reconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in minutes.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_minutes: u64,
    /// Interval between background sweep cycles in seconds. Independent
    /// of any individual entry's TTL.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl TokenConfig {
    /// Default TTL for access-token entries.
    pub fn access_ttl(&self) -> Duration {
        Duration::from_secs(self.access_ttl_minutes * 60)
    }

    /// Default TTL for refresh-token entries.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_ttl_minutes * 60)
    }

    /// Interval between sweep cycles.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Checks the section for values the store cannot operate with.
    ///
    /// The refresh TTL must strictly exceed the access TTL, and the
    /// sweep interval must be non-zero (a zero-period interval is not
    /// representable).
    pub fn validate(&self) -> Result<(), AppError> {
        if self.refresh_ttl_minutes <= self.access_ttl_minutes {
            return Err(AppError::configuration(format!(
                "refresh_ttl_minutes ({}) must exceed access_ttl_minutes ({})",
                self.refresh_ttl_minutes, self.access_ttl_minutes
            )));
        }
        if self.sweep_interval_seconds == 0 {
            return Err(AppError::configuration(
                "sweep_interval_seconds must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_minutes: default_refresh_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_access_ttl() -> u64 {
    15
}

// 7 days
fn default_refresh_ttl() -> u64 {
    10080
}

fn default_sweep_interval() -> u64 {
    60
}
