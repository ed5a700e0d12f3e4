//! In-memory storage implementation

use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory collection
///
/// Backed by a plain vector so `list` preserves insertion order, which the
/// listing use cases expose. Lookups are linear scans; collections here are
/// small (tests and development), so that is fine. Data is lost when the
/// process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty collection
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates a collection pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities
            .iter()
            .find(|e| e.key().as_str() == key.as_str())
            .cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.clone())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if entities
            .iter()
            .any(|e| e.key().as_str() == entity.key().as_str())
        {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                entity.key().as_str()
            )));
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let position = entities
            .iter()
            .position(|e| e.key().as_str() == entity.key().as_str())
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Entity with key '{}' not found",
                    entity.key().as_str()
                ))
            })?;

        entities[position] = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entities.len();
        entities.retain(|e| e.key().as_str() != key.as_str());

        Ok(entities.len() < before)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct NoteId(String);

    impl StorageKey for NoteId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: NoteId,
        body: String,
    }

    impl StorageEntity for Note {
        type Key = NoteId;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: NoteId(id.to_string()),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();
        let n = note("1", "hello");

        storage.create(n.clone()).await.unwrap();

        let result = storage.get(&NoteId("1".to_string())).await.unwrap();
        assert_eq!(result, Some(n));
    }

    #[tokio::test]
    async fn test_create_conflict_on_same_key() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();

        storage.create(note("1", "a")).await.unwrap();
        let result = storage.create(note("1", "b")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();

        storage.create(note("1", "old")).await.unwrap();
        storage.create(note("2", "other")).await.unwrap();
        storage.update(note("1", "new")).await.unwrap();

        let listed = storage.list().await.unwrap();
        assert_eq!(listed[0].body, "new");
        assert_eq!(listed[1].body, "other");
    }

    #[tokio::test]
    async fn test_update_missing_key() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();

        let result = storage.update(note("1", "x")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();

        storage.create(note("1", "x")).await.unwrap();

        assert!(storage.delete(&NoteId("1".to_string())).await.unwrap());
        assert!(!storage.delete(&NoteId("1".to_string())).await.unwrap());
        assert!(!storage.exists(&NoteId("1".to_string())).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let storage: InMemoryStorage<Note> = InMemoryStorage::new();

        storage.create(note("b", "first")).await.unwrap();
        storage.create(note("a", "second")).await.unwrap();
        storage.create(note("c", "third")).await.unwrap();

        let listed = storage.list().await.unwrap();
        let bodies: Vec<&str> = listed.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_with_entities_and_count() {
        let storage = InMemoryStorage::with_entities(vec![note("1", "a"), note("2", "b")]);
        assert_eq!(storage.count().await.unwrap(), 2);
    }
}
