//! Lecture use cases

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::lecture::{Lecture, LectureId, LectureRepository};
use crate::domain::user::UserId;
use crate::domain::venue::VenueId;
use crate::domain::DomainError;

const LECTURE_ALREADY_EXISTS: &str = "There is already an lecture with the name provided.";

/// Request to create a new lecture
#[derive(Debug, Clone)]
pub struct CreateLectureRequest {
    pub name: String,
    pub description: String,
    pub capacity: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub speakers: Option<Vec<String>>,
    pub participants: Option<Vec<String>>,
}

/// Lecture service
#[derive(Debug)]
pub struct LectureService {
    lectures: Arc<dyn LectureRepository>,
}

impl LectureService {
    /// Create a new lecture service
    pub fn new(lectures: Arc<dyn LectureRepository>) -> Self {
        Self { lectures }
    }

    /// Create a lecture
    ///
    /// The only business rule is name uniqueness (case-sensitive).
    pub async fn create(&self, request: CreateLectureRequest) -> Result<Lecture, DomainError> {
        if self.lectures.find_by_name(&request.name).await?.is_some() {
            return Err(DomainError::conflict(LECTURE_ALREADY_EXISTS));
        }

        let mut lecture = Lecture::new(
            LectureId::generate(),
            request.name,
            request.description,
            request.capacity,
            request.start_date,
            request.end_date,
        );

        if let Some(venue) = request.venue {
            lecture = lecture.with_venue(VenueId::new(venue));
        }

        if let Some(speakers) = request.speakers {
            lecture = lecture.with_speakers(speakers.into_iter().map(UserId::new).collect());
        }

        if let Some(participants) = request.participants {
            lecture =
                lecture.with_participants(participants.into_iter().map(UserId::new).collect());
        }

        debug!(lecture = %lecture.id(), "Creating lecture");

        self.lectures.create(lecture).await
    }

    /// List all lectures
    pub async fn list(&self) -> Result<Vec<Lecture>, DomainError> {
        self.lectures.list().await
    }
}
