//! Storage-backed event repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::event::{Event, EventId, EventRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Event repository over a document collection
///
/// Name lookup is a linear scan; event collections are small and the
/// backend stores opaque documents.
#[derive(Debug)]
pub struct StorageEventRepository {
    storage: Arc<dyn Storage<Event>>,
}

impl StorageEventRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Event>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl EventRepository for StorageEventRepository {
    async fn get(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Event>, DomainError> {
        let events = self.storage.list().await?;
        Ok(events.into_iter().find(|e| e.name() == name))
    }

    async fn create(&self, event: Event) -> Result<Event, DomainError> {
        self.storage.create(event).await
    }

    async fn update(&self, event: Event) -> Result<Event, DomainError> {
        self.storage.update(event).await
    }

    async fn delete(&self, id: &EventId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        self.storage.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventSchedule;
    use crate::infrastructure::storage::InMemoryStorage;
    use chrono::TimeZone;
    use chrono::Utc;

    fn repository() -> StorageEventRepository {
        StorageEventRepository::new(Arc::new(InMemoryStorage::<Event>::new()))
    }

    fn event(name: &str) -> Event {
        let schedule = EventSchedule {
            registration_start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            registration_end_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            start_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 2, 3, 0, 0, 0).unwrap(),
        };
        Event::new(EventId::generate(), name, "desc", "loc", 100, schedule)
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let repo = repository();
        repo.create(event("Test Event")).await.unwrap();

        assert!(repo.find_by_name("Test Event").await.unwrap().is_some());
        assert!(repo.find_by_name("test event").await.unwrap().is_none());
        assert!(repo.find_by_name("Other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order() {
        let repo = repository();
        repo.create(event("First Event")).await.unwrap();
        repo.create(event("Second Event")).await.unwrap();
        repo.create(event("Third Event")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["First Event", "Second Event", "Third Event"]);
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let repo = repository();
        let stored = repo.create(event("Test Event")).await.unwrap();

        assert!(repo.get(stored.id()).await.unwrap().is_some());
        assert!(repo.delete(stored.id()).await.unwrap());
        assert!(repo.get(stored.id()).await.unwrap().is_none());
    }
}
