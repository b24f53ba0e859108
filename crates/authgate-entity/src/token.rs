//! The token record minted at authentication and at refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One token issuance: an access/refresh string pair bound to a user.
///
/// Records are immutable once minted. The access and refresh sides are
/// stored under independent expiry clocks, so an expired access token
/// does not invalidate the refresh side of the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Opaque access token string.
    pub access_token: String,
    /// Opaque refresh token string. Distinct from the access token.
    pub refresh_token: String,
    /// ID of the user this record was issued to.
    pub user_id: String,
    /// Username at issuance time.
    pub username: String,
    /// When the access side expires.
    pub access_expires_at: DateTime<Utc>,
    /// When the refresh side expires. Always later than the access side.
    pub refresh_expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_roundtrip() {
        let now = Utc::now();
        let record = TokenRecord {
            access_token: "acc-1".to_string(),
            refresh_token: "ref-1".to_string(),
            user_id: "42".to_string(),
            username: "alice".to_string(),
            access_expires_at: now + Duration::minutes(15),
            refresh_expires_at: now + Duration::days(7),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: TokenRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
