//! Lecture entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::UserId;
use crate::domain::venue::VenueId;

/// Lecture identifier - an opaque generated string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(String);

impl LectureId {
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

impl std::fmt::Display for LectureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for LectureId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lecture entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    /// Unique identifier
    id: LectureId,
    /// Display name, unique among lectures (case-sensitive)
    name: String,
    /// Free-form description
    description: String,
    /// Maximum audience size
    capacity: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    /// Venue hosting this lecture, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    venue: Option<VenueId>,
    /// Speakers, by reference
    #[serde(skip_serializing_if = "Option::is_none")]
    speakers: Option<Vec<UserId>>,
    /// Registered participants, by reference
    #[serde(skip_serializing_if = "Option::is_none")]
    participants: Option<Vec<UserId>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lecture {
    /// Create a new lecture
    pub fn new(
        id: LectureId,
        name: impl Into<String>,
        description: impl Into<String>,
        capacity: i64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            description: description.into(),
            capacity,
            start_date,
            end_date,
            venue: None,
            speakers: None,
            participants: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign a venue (builder pattern)
    pub fn with_venue(mut self, venue: VenueId) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Set the speaker list (builder pattern)
    pub fn with_speakers(mut self, speakers: Vec<UserId>) -> Self {
        self.speakers = Some(speakers);
        self
    }

    /// Set the participant list (builder pattern)
    pub fn with_participants(mut self, participants: Vec<UserId>) -> Self {
        self.participants = Some(participants);
        self
    }

    // Getters

    pub fn id(&self) -> &LectureId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn venue(&self) -> Option<&VenueId> {
        self.venue.as_ref()
    }

    pub fn speakers(&self) -> Option<&[UserId]> {
        self.speakers.as_deref()
    }

    pub fn participants(&self) -> Option<&[UserId]> {
        self.participants.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl StorageEntity for Lecture {
    type Key = LectureId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
