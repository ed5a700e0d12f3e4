//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId, UserRole};
use crate::domain::DomainError;

/// Repository contract for user accounts
///
/// Email lookup is the natural key used by authentication and the
/// update/change-role use cases; it is an exact, case-sensitive match.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by identifier
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user, returns true if something was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// List users in insertion order, optionally filtered by role
    async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError>;
}
