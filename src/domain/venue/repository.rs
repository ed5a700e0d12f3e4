//! Venue repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Venue, VenueId};
use crate::domain::DomainError;

/// Repository contract for venues
#[async_trait]
pub trait VenueRepository: Send + Sync + Debug {
    /// Get a venue by identifier
    async fn get(&self, id: &VenueId) -> Result<Option<Venue>, DomainError>;

    /// Find a venue by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Venue>, DomainError>;

    /// Persist a new venue
    async fn create(&self, venue: Venue) -> Result<Venue, DomainError>;

    /// Replace an existing venue
    async fn update(&self, venue: Venue) -> Result<Venue, DomainError>;

    /// Delete a venue, returns true if something was removed
    async fn delete(&self, id: &VenueId) -> Result<bool, DomainError>;

    /// List all venues in insertion order
    async fn list(&self) -> Result<Vec<Venue>, DomainError>;
}
