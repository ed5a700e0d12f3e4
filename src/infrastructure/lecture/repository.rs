//! Storage-backed lecture repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::lecture::{Lecture, LectureId, LectureRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Lecture repository over a document collection
#[derive(Debug)]
pub struct StorageLectureRepository {
    storage: Arc<dyn Storage<Lecture>>,
}

impl StorageLectureRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Lecture>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl LectureRepository for StorageLectureRepository {
    async fn get(&self, id: &LectureId) -> Result<Option<Lecture>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Lecture>, DomainError> {
        let lectures = self.storage.list().await?;
        Ok(lectures.into_iter().find(|l| l.name() == name))
    }

    async fn create(&self, lecture: Lecture) -> Result<Lecture, DomainError> {
        self.storage.create(lecture).await
    }

    async fn update(&self, lecture: Lecture) -> Result<Lecture, DomainError> {
        self.storage.update(lecture).await
    }

    async fn delete(&self, id: &LectureId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self) -> Result<Vec<Lecture>, DomainError> {
        self.storage.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;
    use chrono::{TimeZone, Utc};

    fn repository() -> StorageLectureRepository {
        StorageLectureRepository::new(Arc::new(InMemoryStorage::<Lecture>::new()))
    }

    fn lecture(name: &str) -> Lecture {
        Lecture::new(
            LectureId::generate(),
            name,
            "desc",
            50,
            Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 1, 11, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let repo = repository();
        repo.create(lecture("Intro to Rust")).await.unwrap();

        assert!(repo.find_by_name("Intro to Rust").await.unwrap().is_some());
        assert!(repo.find_by_name("intro to rust").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let repo = repository();
        let stored = repo.create(lecture("Intro to Rust")).await.unwrap();

        assert!(repo.get(stored.id()).await.unwrap().is_some());
        assert!(repo.delete(stored.id()).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
