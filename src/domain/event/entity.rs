//! Event entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::venue::VenueId;

/// Event identifier - an opaque generated string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
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

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for EventId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// The four dates that define an event's timeline
///
/// Validation of their ordering lives in [`super::validation`]; this struct
/// only carries the parsed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchedule {
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    id: EventId,
    /// Display name, unique among events (case-sensitive)
    name: String,
    /// Free-form description
    description: String,
    /// Where the event takes place
    location: String,
    /// Maximum number of attendees, always positive
    capacity: i64,
    registration_start_date: DateTime<Utc>,
    registration_end_date: DateTime<Utc>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    /// Venues attached to this event, by reference
    venues: Vec<VenueId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event
    ///
    /// Callers are expected to have validated the schedule, capacity and
    /// name beforehand; the entity does not re-check them.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        capacity: i64,
        schedule: EventSchedule,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            description: description.into(),
            location: location.into(),
            capacity,
            registration_start_date: schedule.registration_start_date,
            registration_end_date: schedule.registration_end_date,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            venues: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach venue references (builder pattern)
    pub fn with_venues(mut self, venues: Vec<VenueId>) -> Self {
        self.venues = venues;
        self
    }

    // Getters

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn registration_start_date(&self) -> DateTime<Utc> {
        self.registration_start_date
    }

    pub fn registration_end_date(&self) -> DateTime<Utc> {
        self.registration_end_date
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn venues(&self) -> &[VenueId] {
        &self.venues
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl StorageEntity for Event {
    type Key = EventId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
