//! Event use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::event::{
    parse_event_date, validate_event_capacity, validate_event_name, validate_event_schedule,
    Event, EventId, EventRepository, EventSchedule,
};
use crate::domain::venue::VenueId;
use crate::domain::DomainError;

const EVENT_ALREADY_EXISTS: &str = "There is already an event with the name provided.";

/// Request to create a new event
///
/// Dates arrive as strings; parsing them is part of the use case's
/// validation, and a parse failure is reported as the same invalid-dates
/// error as a broken ordering.
#[derive(Debug, Clone)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    pub capacity: i64,
    pub registration_start_date: String,
    pub registration_end_date: String,
    pub start_date: String,
    pub end_date: String,
    pub venues: Vec<String>,
}

/// Event service
#[derive(Debug)]
pub struct EventService {
    events: Arc<dyn EventRepository>,
}

impl EventService {
    /// Create a new event service
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Create an event
    ///
    /// Checks run in a fixed order: dates, capacity, name, duplicate name.
    /// Nothing is persisted unless every check passes.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, DomainError> {
        let schedule = EventSchedule {
            registration_start_date: parse_event_date(&request.registration_start_date)
                .map_err(|e| DomainError::validation(e.to_string()))?,
            registration_end_date: parse_event_date(&request.registration_end_date)
                .map_err(|e| DomainError::validation(e.to_string()))?,
            start_date: parse_event_date(&request.start_date)
                .map_err(|e| DomainError::validation(e.to_string()))?,
            end_date: parse_event_date(&request.end_date)
                .map_err(|e| DomainError::validation(e.to_string()))?,
        };

        validate_event_schedule(&schedule).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_event_capacity(request.capacity)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_event_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.events.find_by_name(&request.name).await?.is_some() {
            return Err(DomainError::conflict(EVENT_ALREADY_EXISTS));
        }

        let event = Event::new(
            EventId::generate(),
            request.name,
            request.description,
            request.location,
            request.capacity,
            schedule,
        )
        .with_venues(request.venues.into_iter().map(VenueId::new).collect());

        debug!(event = %event.id(), "Creating event");

        self.events.create(event).await
    }

    /// List all events
    pub async fn list(&self) -> Result<Vec<Event>, DomainError> {
        self.events.list().await
    }
}
