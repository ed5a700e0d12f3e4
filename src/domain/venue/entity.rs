//! Venue entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::event::EventId;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::UserId;

/// Venue identifier - an opaque generated string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
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

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for VenueId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Venue entity
///
/// Staff leaders are raw user references: a referenced user may be deleted
/// while the reference remains. Reassignment replaces the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier
    id: VenueId,
    /// Display name, unique among venues (case-sensitive)
    name: String,
    /// Street address
    address: String,
    /// Seating capacity, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<i64>,
    /// Event this venue belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<EventId>,
    /// Current staff leaders, by reference
    #[serde(default)]
    staff_leaders: Vec<UserId>,
}

impl Venue {
    /// Create a new venue
    pub fn new(id: VenueId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            capacity: None,
            event: None,
            staff_leaders: Vec::new(),
        }
    }

    /// Set the capacity (builder pattern)
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Attach an event reference (builder pattern)
    pub fn with_event(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the initial staff leaders (builder pattern)
    pub fn with_staff_leaders(mut self, staff_leaders: Vec<UserId>) -> Self {
        self.staff_leaders = staff_leaders;
        self
    }

    // Getters

    pub fn id(&self) -> &VenueId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn capacity(&self) -> Option<i64> {
        self.capacity
    }

    pub fn event(&self) -> Option<&EventId> {
        self.event.as_ref()
    }

    pub fn staff_leaders(&self) -> &[UserId] {
        &self.staff_leaders
    }

    // Mutators

    /// Replace the staff-leader list wholesale
    pub fn set_staff_leaders(&mut self, staff_leaders: Vec<UserId>) {
        self.staff_leaders = staff_leaders;
    }
}

impl StorageEntity for Venue {
    type Key = VenueId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_creation() {
        let venue = Venue::new(VenueId::generate(), "Main Hall", "Test Address, 123");

        assert_eq!(venue.name(), "Main Hall");
        assert_eq!(venue.address(), "Test Address, 123");
        assert!(venue.capacity().is_none());
        assert!(venue.event().is_none());
        assert!(venue.staff_leaders().is_empty());
    }

    #[test]
    fn test_venue_builders() {
        let event_id = EventId::generate();
        let leader = UserId::generate();
        let venue = Venue::new(VenueId::generate(), "Main Hall", "Somewhere")
            .with_capacity(250)
            .with_event(event_id.clone())
            .with_staff_leaders(vec![leader.clone()]);

        assert_eq!(venue.capacity(), Some(250));
        assert_eq!(venue.event(), Some(&event_id));
        assert_eq!(venue.staff_leaders(), &[leader]);
    }

    #[test]
    fn test_leader_replacement_is_wholesale() {
        let old_a = UserId::generate();
        let old_b = UserId::generate();
        let new_leader = UserId::generate();

        let mut venue = Venue::new(VenueId::generate(), "Main Hall", "Somewhere")
            .with_staff_leaders(vec![old_a, old_b]);

        venue.set_staff_leaders(vec![new_leader.clone()]);

        assert_eq!(venue.staff_leaders(), &[new_leader]);
    }

    #[test]
    fn test_missing_staff_leaders_deserialize_empty() {
        // Documents written before the field existed have no staff_leaders
        // key at all.
        let json = r#"{"id":"venue-1","name":"Main Hall","address":"Somewhere"}"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        assert!(venue.staff_leaders().is_empty());
    }
}
