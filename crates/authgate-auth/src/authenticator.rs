//! Username/password verification against the user directory.

use std::sync::Arc;

use tracing::{info, warn};

use authgate_core::error::AppError;
use authgate_entity::UserIdentity;

use crate::directory::UserDirectory;
use crate::hasher::PasswordHasher;

/// Verifies submitted credentials and produces a validated identity.
#[derive(Clone)]
pub struct Authenticator {
    /// External user lookup.
    directory: Arc<dyn UserDirectory>,
    /// Keyed digest computation.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: PasswordHasher) -> Self {
        Self { directory, hasher }
    }

    /// Verifies a username/password pair.
    ///
    /// On success the returned identity has its password digest cleared;
    /// the digest is held only for the comparison and is never logged.
    /// Transports must surface the NotFound and CredentialMismatch kinds
    /// identically to the caller.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserIdentity, AppError> {
        let mut user = self
            .directory
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "Login attempt for unknown user");
                AppError::not_found(format!("No such user: {username}"))
            })?;

        let computed = self.hasher.digest(password)?;

        if !PasswordHasher::digests_match(&computed, &user.password_digest) {
            warn!(username, "Password mismatch");
            return Err(AppError::credential_mismatch(format!(
                "password mismatch for user {username}"
            )));
        }

        user.clear_digest();
        info!(user_id = %user.id, username, "Credentials verified");
        Ok(user)
    }
}
