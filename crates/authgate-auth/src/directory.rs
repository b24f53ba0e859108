//! User lookup contract and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use authgate_core::result::AppResult;
use authgate_entity::UserIdentity;

/// Lookup-by-username contract against the external credential store.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Finds a user by username, including the stored password digest.
    /// Returns `None` if no such user exists.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserIdentity>>;
}

/// In-memory user directory for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    users: Arc<RwLock<HashMap<String, UserIdentity>>>,
}

impl MemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an identity, replacing any existing entry for the same
    /// username.
    pub async fn insert(&self, identity: UserIdentity) {
        let mut users = self.users.write().await;
        users.insert(identity.username.clone(), identity);
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns whether the directory is empty.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserIdentity>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(username: &str) -> UserIdentity {
        UserIdentity {
            id: "1".to_string(),
            username: username.to_string(),
            password_digest: "digest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let directory = MemoryUserDirectory::new();
        directory.insert(identity("alice")).await;

        let found = directory.find_by_username("alice").await.unwrap();
        assert_eq!(found.unwrap().username, "alice");

        let missing = directory.find_by_username("bob").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let directory = MemoryUserDirectory::new();
        directory.insert(identity("alice")).await;

        let mut updated = identity("alice");
        updated.password_digest = "new-digest".to_string();
        directory.insert(updated).await;

        assert_eq!(directory.len().await, 1);
        let found = directory.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.password_digest, "new-digest");
    }
}
