//! Lecture repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Lecture, LectureId};
use crate::domain::DomainError;

/// Repository contract for lectures
#[async_trait]
pub trait LectureRepository: Send + Sync + Debug {
    /// Get a lecture by identifier
    async fn get(&self, id: &LectureId) -> Result<Option<Lecture>, DomainError>;

    /// Find a lecture by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Lecture>, DomainError>;

    /// Persist a new lecture
    async fn create(&self, lecture: Lecture) -> Result<Lecture, DomainError>;

    /// Replace an existing lecture
    async fn update(&self, lecture: Lecture) -> Result<Lecture, DomainError>;

    /// Delete a lecture, returns true if something was removed
    async fn delete(&self, id: &LectureId) -> Result<bool, DomainError>;

    /// List all lectures in insertion order
    async fn list(&self) -> Result<Vec<Lecture>, DomainError>;
}
