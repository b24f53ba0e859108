//! Keyed password digest computation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

use authgate_core::error::AppError;

/// Computes keyed password digests.
///
/// The digest binds the password to the deployment's API key and client
/// ID as salt material, so a digest lifted from one deployment does not
/// verify in another.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    api_key: String,
    client_id: String,
}

impl PasswordHasher {
    /// Creates a hasher keyed with the deployment credentials.
    pub fn new(api_key: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
        }
    }

    /// Computes the digest of `password` under the configured key
    /// material.
    ///
    /// Every input digests, including the empty string; an empty
    /// password is rejected downstream by the digest comparison, not
    /// here.
    pub fn digest(&self, password: &str) -> Result<String, AppError> {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(self.api_key.as_bytes());
        hasher.update(self.client_id.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(hasher.finalize()))
    }

    /// Compares a computed digest against the stored one without
    /// returning early on the first differing byte.
    pub fn digests_match(computed: &str, stored: &str) -> bool {
        if computed.len() != stored.len() {
            return false;
        }

        let mut diff = 0u8;
        for (a, b) in computed.bytes().zip(stored.bytes()) {
            diff |= a ^ b;
        }
        diff == 0
    }
}
