//! Event repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Event, EventId};
use crate::domain::DomainError;

/// Repository contract for events
///
/// `find_by_name` is an exact, case-sensitive match; uniqueness of names is
/// enforced by the create use case, not by this contract.
#[async_trait]
pub trait EventRepository: Send + Sync + Debug {
    /// Get an event by its identifier
    async fn get(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Find an event by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Event>, DomainError>;

    /// Persist a new event
    async fn create(&self, event: Event) -> Result<Event, DomainError>;

    /// Replace an existing event
    async fn update(&self, event: Event) -> Result<Event, DomainError>;

    /// Delete an event, returns true if something was removed
    async fn delete(&self, id: &EventId) -> Result<bool, DomainError>;

    /// List all events in insertion order
    async fn list(&self) -> Result<Vec<Event>, DomainError>;
}
