//! Storage-backed venue repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::venue::{Venue, VenueId, VenueRepository};
use crate::domain::DomainError;

/// Venue repository over a document collection
#[derive(Debug)]
pub struct StorageVenueRepository {
    storage: Arc<dyn Storage<Venue>>,
}

impl StorageVenueRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Venue>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl VenueRepository for StorageVenueRepository {
    async fn get(&self, id: &VenueId) -> Result<Option<Venue>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Venue>, DomainError> {
        let venues = self.storage.list().await?;
        Ok(venues.into_iter().find(|v| v.name() == name))
    }

    async fn create(&self, venue: Venue) -> Result<Venue, DomainError> {
        self.storage.create(venue).await
    }

    async fn update(&self, venue: Venue) -> Result<Venue, DomainError> {
        self.storage.update(venue).await
    }

    async fn delete(&self, id: &VenueId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self) -> Result<Vec<Venue>, DomainError> {
        self.storage.list().await
    }
}
