//! Lecture endpoints

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::lecture::Lecture;
use crate::infrastructure::lecture::CreateLectureRequest;

/// Request to create a new lecture
#[derive(Debug, Deserialize)]
pub struct CreateLectureBody {
    pub name: String,
    pub description: String,
    pub capacity: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub speakers: Option<Vec<String>>,
    #[serde(default)]
    pub participants: Option<Vec<String>>,
}

/// Single-lecture envelope
#[derive(Debug, Serialize)]
pub struct LectureEnvelope {
    pub lecture: Lecture,
}

/// Lecture-list envelope
#[derive(Debug, Serialize)]
pub struct LecturesEnvelope {
    pub lectures: Vec<Lecture>,
}

/// POST /lecture
pub async fn create_lecture(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<CreateLectureBody>,
) -> Result<(StatusCode, Json<LectureEnvelope>), ApiError> {
    debug!(name = %body.name, "Creating lecture");

    let lecture = state
        .lecture_service
        .create(CreateLectureRequest {
            name: body.name,
            description: body.description,
            capacity: body.capacity,
            start_date: body.start_date,
            end_date: body.end_date,
            venue: body.venue,
            speakers: body.speakers,
            participants: body.participants,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LectureEnvelope { lecture })))
}

/// GET /lectures
pub async fn list_lectures(
    State(state): State<AppState>,
) -> Result<Json<LecturesEnvelope>, ApiError> {
    let lectures = state.lecture_service.list().await?;

    Ok(Json(LecturesEnvelope { lectures }))
}
