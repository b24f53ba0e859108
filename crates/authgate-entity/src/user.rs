//! User identity projection used during authentication.

use serde::{Deserialize, Serialize};

/// Minimal projection of a directory user needed for credential checks.
///
/// The stored digest is held only for the duration of a single
/// verification call; the authenticator clears it before the identity is
/// returned, and it is redacted from `Debug` output so it can never leak
/// into logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique user identifier.
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Stored keyed password digest.
    #[serde(skip_serializing, default)]
    pub password_digest: String,
}

impl UserIdentity {
    /// Clears the stored digest. Called after the credential comparison.
    pub fn clear_digest(&mut self) {
        self.password_digest.clear();
    }
}

impl std::fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserIdentity")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_digest", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_digest() {
        let identity = UserIdentity {
            id: "1".to_string(),
            username: "alice".to_string(),
            password_digest: "s3cret-digest".to_string(),
        };

        let output = format!("{identity:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("s3cret-digest"));
    }

    #[test]
    fn test_serialize_skips_digest() {
        let identity = UserIdentity {
            id: "1".to_string(),
            username: "alice".to_string(),
            password_digest: "s3cret-digest".to_string(),
        };

        let json = serde_json::to_string(&identity).unwrap();
        assert!(!json.contains("s3cret-digest"));
    }
}
