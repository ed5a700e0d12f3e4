//! Event endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::event::Event;
use crate::infrastructure::event::CreateEventRequest;

/// Request to create a new event
///
/// Dates are strings on purpose: the use case owns parsing them, and a
/// malformed date is a business failure (invalid dates), not a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateEventBody {
    pub name: String,
    pub description: String,
    pub location: String,
    pub capacity: i64,
    pub registration_start_date: String,
    pub registration_end_date: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub venues: Vec<String>,
}

/// Single-event envelope
#[derive(Debug, Serialize)]
pub struct EventEnvelope {
    pub event: Event,
}

/// Event-list envelope
#[derive(Debug, Serialize)]
pub struct EventsEnvelope {
    pub events: Vec<Event>,
}

/// POST /event
pub async fn create_event(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<CreateEventBody>,
) -> Result<(StatusCode, Json<EventEnvelope>), ApiError> {
    debug!(name = %body.name, "Creating event");

    let event = state
        .event_service
        .create(CreateEventRequest {
            name: body.name,
            description: body.description,
            location: body.location,
            capacity: body.capacity,
            registration_start_date: body.registration_start_date,
            registration_end_date: body.registration_end_date,
            start_date: body.start_date,
            end_date: body.end_date,
            venues: body.venues,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventEnvelope { event })))
}

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<EventsEnvelope>, ApiError> {
    let events = state.event_service.list().await?;

    Ok(Json(EventsEnvelope { events }))
}
