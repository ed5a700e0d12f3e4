//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::EventId;
use crate::domain::storage::{StorageEntity, StorageKey};

/// User identifier - an opaque generated string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Role of a user within the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Organizer,
    StaffLeader,
    Staff,
    Speaker,
    #[default]
    Participant,
}

impl UserRole {
    /// Every role, in a stable order
    pub const ALL: [UserRole; 6] = [
        UserRole::Admin,
        UserRole::Organizer,
        UserRole::StaffLeader,
        UserRole::Staff,
        UserRole::Speaker,
        UserRole::Participant,
    ];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Organizer => write!(f, "organizer"),
            Self::StaffLeader => write!(f, "staff_leader"),
            Self::Staff => write!(f, "staff"),
            Self::Speaker => write!(f, "speaker"),
            Self::Participant => write!(f, "participant"),
        }
    }
}

/// User entity
///
/// The password hash is part of the stored document; it is stripped at the
/// API boundary, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// Display name
    username: String,
    /// Login email, unique (case-sensitive exact match)
    email: String,
    /// Argon2 hash of the password
    password_hash: String,
    /// Role within the platform
    role: UserRole,
    /// When the account was registered
    registration_date: DateTime<Utc>,
    /// Event this user is attached to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<EventId>,
    // Optional profile fields
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    t_shirt_size: Option<String>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            registration_date: Utc::now(),
            event: None,
            phone: None,
            company: None,
            job_title: None,
            interests: None,
            t_shirt_size: None,
        }
    }

    /// Attach an event reference (builder pattern)
    pub fn with_event(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    /// Set optional profile fields (builder pattern)
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = Some(interests);
        self
    }

    pub fn with_t_shirt_size(mut self, size: impl Into<String>) -> Self {
        self.t_shirt_size = Some(size.into());
        self
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn registration_date(&self) -> DateTime<Utc> {
        self.registration_date
    }

    pub fn event(&self) -> Option<&EventId> {
        self.event.as_ref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn interests(&self) -> Option<&[String]> {
        self.interests.as_deref()
    }

    pub fn t_shirt_size(&self) -> Option<&str> {
        self.t_shirt_size.as_deref()
    }

    // Mutators

    /// Replace the role, leaving every other field untouched
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Replace the username
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Replace the event reference
    pub fn set_event(&mut self, event: Option<EventId>) {
        self.event = event;
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
