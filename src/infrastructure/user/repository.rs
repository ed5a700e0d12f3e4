//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserRepository, UserRole};
use crate::domain::DomainError;

/// User repository over a document collection
///
/// Email lookup is a linear scan with exact, case-sensitive comparison.
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.storage.list().await?;
        Ok(users.into_iter().find(|u| u.email() == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.storage.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError> {
        let users = self.storage.list().await?;

        Ok(match role {
            Some(role) => users.into_iter().filter(|u| u.role() == role).collect(),
            None => users,
        })
    }
}
