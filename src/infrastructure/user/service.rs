//! User use cases: registration, authentication, role changes, updates

use std::sync::Arc;

use tracing::debug;

use crate::domain::event::EventId;
use crate::domain::user::{User, UserId, UserRepository, UserRole};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const ACCOUNT_ALREADY_EXISTS: &str = "There is already an account with the email provided.";
const USER_NOT_FOUND: &str = "User not found error.";
const WRONG_CREDENTIALS: &str = "Credentials are not valid.";

/// Request to register a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to participant when absent
    pub role: Option<UserRole>,
    pub event: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub interests: Option<Vec<String>>,
    pub t_shirt_size: Option<String>,
}

/// Request to update a user, addressed by email
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub email: String,
    pub username: String,
    /// Replaces the stored event reference when present
    pub event: Option<String>,
}

/// User service
#[derive(Debug)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a new user
    ///
    /// Emails are unique (case-sensitive). The password is hashed before
    /// anything is stored.
    pub async fn register(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::conflict(ACCOUNT_ALREADY_EXISTS));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let mut user = User::new(
            UserId::generate(),
            request.username,
            request.email,
            password_hash,
            request.role.unwrap_or_default(),
        );

        if let Some(event) = request.event {
            user = user.with_event(EventId::new(event));
        }
        if let Some(phone) = request.phone {
            user = user.with_phone(phone);
        }
        if let Some(company) = request.company {
            user = user.with_company(company);
        }
        if let Some(job_title) = request.job_title {
            user = user.with_job_title(job_title);
        }
        if let Some(interests) = request.interests {
            user = user.with_interests(interests);
        }
        if let Some(size) = request.t_shirt_size {
            user = user.with_t_shirt_size(size);
        }

        debug!(user = %user.id(), "Registering user");

        self.users.create(user).await
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password produce the same error;
    /// callers cannot probe which emails are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::credential(WRONG_CREDENTIALS))?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(DomainError::credential(WRONG_CREDENTIALS));
        }

        Ok(user)
    }

    /// Change a user's role, addressed by email
    pub async fn change_role(&self, email: &str, role: UserRole) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        user.set_role(role);

        debug!(user = %user.id(), %role, "Changing user role");

        self.users.update(user).await
    }

    /// Update a user's username and event reference, addressed by email
    ///
    /// Every other field (role, password, profile) is preserved.
    pub async fn update(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        user.set_username(request.username);
        if let Some(event) = request.event {
            user.set_event(Some(EventId::new(event)));
        }

        self.users.update(user).await
    }

    /// Get a user by identifier
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        self.users.get(&UserId::new(id)).await
    }

    /// List users, optionally filtered by role
    pub async fn list(&self, role: Option<UserRole>) -> Result<Vec<User>, DomainError> {
        self.users.list(role).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::infrastructure::user::password::mock::MockPasswordHasher;
    use crate::infrastructure::user::StorageUserRepository;

    fn service() -> UserService {
        let users = Arc::new(StorageUserRepository::new(Arc::new(
            InMemoryStorage::<User>::new(),
        )));
        UserService::new(users, Arc::new(MockPasswordHasher::new()))
    }

    fn request(email: &str, username: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role: None,
            event: None,
            phone: None,
            company: None,
            job_title: None,
            interests: None,
            t_shirt_size: None,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = service();

        let user = service
            .register(request("newuser@example.com", "newuser"))
            .await
            .unwrap();

        assert_eq!(user.email(), "newuser@example.com");
        assert_eq!(user.username(), "newuser");
        assert_eq!(user.password_hash(), "hashed_password123");
        assert!(!user.id().as_str().is_empty());
    }

    #[tokio::test]
    async fn test_register_defaults_role_to_participant() {
        let service = service();

        let user = service
            .register(request("default@example.com", "default"))
            .await
            .unwrap();

        assert_eq!(user.role(), UserRole::Participant);
    }

    #[tokio::test]
    async fn test_register_with_full_profile() {
        let service = service();

        let mut req = request("full@example.com", "fulluser");
        req.role = Some(UserRole::Admin);
        req.phone = Some("123456789".to_string());
        req.company = Some("Test Company".to_string());
        req.job_title = Some("Developer".to_string());
        req.interests = Some(vec!["tech".to_string(), "programming".to_string()]);
        req.t_shirt_size = Some("L".to_string());

        let user = service.register(req).await.unwrap();

        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.phone(), Some("123456789"));
        assert_eq!(user.company(), Some("Test Company"));
        assert_eq!(user.job_title(), Some("Developer"));
        assert_eq!(user.t_shirt_size(), Some("L"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let service = service();

        service
            .register(request("existing@example.com", "first"))
            .await
            .unwrap();
        let error = service
            .register(request("existing@example.com", "second"))
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "There is already an account with the email provided."
        );
        assert_eq!(service.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service();

        service
            .register(request("valid@example.com", "valid"))
            .await
            .unwrap();

        let user = service
            .authenticate("valid@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.email(), "valid@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let service = service();

        service
            .register(request("valid@example.com", "valid"))
            .await
            .unwrap();

        let unknown_email = service
            .authenticate("nonexistent@example.com", "password123")
            .await
            .unwrap_err();
        let wrong_password = service
            .authenticate("valid@example.com", "wrongpassword")
            .await
            .unwrap_err();

        assert_eq!(unknown_email.to_string(), "Credentials are not valid.");
        assert_eq!(wrong_password.to_string(), "Credentials are not valid.");
    }

    #[tokio::test]
    async fn test_authenticate_email_is_case_sensitive() {
        let service = service();

        service
            .register(request("Test@Example.com", "cased"))
            .await
            .unwrap();

        let error = service
            .authenticate("test@example.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Credentials are not valid.");
    }

    #[tokio::test]
    async fn test_change_role() {
        let service = service();

        service
            .register(request("user@example.com", "user"))
            .await
            .unwrap();

        let user = service
            .change_role("user@example.com", UserRole::Admin)
            .await
            .unwrap();
        assert_eq!(user.role(), UserRole::Admin);

        let stored = service.get(user.id().as_str()).await.unwrap().unwrap();
        assert_eq!(stored.role(), UserRole::Admin);
    }

    #[tokio::test]
    async fn test_change_role_cycles_through_all_roles() {
        let service = service();

        service
            .register(request("roletest@example.com", "roletest"))
            .await
            .unwrap();

        for role in UserRole::ALL {
            let user = service.change_role("roletest@example.com", role).await.unwrap();
            assert_eq!(user.role(), role);
        }
    }

    #[tokio::test]
    async fn test_change_role_unknown_user() {
        let service = service();

        let error = service
            .change_role("nonexistent@example.com", UserRole::Admin)
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "User not found error.");
    }

    #[tokio::test]
    async fn test_change_role_preserves_other_fields() {
        let service = service();

        let mut req = request("preserve@example.com", "preserveuser");
        req.phone = Some("123456789".to_string());
        service.register(req).await.unwrap();

        let user = service
            .change_role("preserve@example.com", UserRole::Organizer)
            .await
            .unwrap();

        assert_eq!(user.username(), "preserveuser");
        assert_eq!(user.email(), "preserve@example.com");
        assert_eq!(user.phone(), Some("123456789"));
        assert_eq!(user.password_hash(), "hashed_password123");
    }

    #[tokio::test]
    async fn test_update_replaces_username_and_event() {
        let service = service();

        let mut req = request("update@example.com", "oldusername");
        req.role = Some(UserRole::Admin);
        req.company = Some("Old Company".to_string());
        service.register(req).await.unwrap();

        let user = service
            .update(UpdateUserRequest {
                email: "update@example.com".to_string(),
                username: "newusername".to_string(),
                event: Some("event-2".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.username(), "newusername");
        assert_eq!(user.event().unwrap().as_str(), "event-2");
        // Everything else is preserved
        assert_eq!(user.role(), UserRole::Admin);
        assert_eq!(user.company(), Some("Old Company"));
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let service = service();

        let error = service
            .update(UpdateUserRequest {
                email: "nonexistent@example.com".to_string(),
                username: "newusername".to_string(),
                event: None,
            })
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "User not found error.");
    }

    #[tokio::test]
    async fn test_list_with_role_filter() {
        let service = service();

        let mut admin = request("admin1@example.com", "admin1");
        admin.role = Some(UserRole::Admin);
        service.register(admin).await.unwrap();

        let mut admin2 = request("admin2@example.com", "admin2");
        admin2.role = Some(UserRole::Admin);
        service.register(admin2).await.unwrap();

        service
            .register(request("participant@example.com", "participant"))
            .await
            .unwrap();

        assert_eq!(service.list(None).await.unwrap().len(), 3);
        assert_eq!(
            service.list(Some(UserRole::Admin)).await.unwrap().len(),
            2
        );
        assert!(service
            .list(Some(UserRole::Organizer))
            .await
            .unwrap()
            .is_empty());
    }
}
