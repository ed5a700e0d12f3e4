//! Event domain
//!
//! Events are the top-level resource: venues and users may carry a
//! reference to the event they belong to. Event names are unique
//! (case-sensitive), and the four schedule dates obey the ordering rules in
//! [`validation`].

mod entity;
mod repository;
pub mod validation;

pub use entity::{Event, EventId, EventSchedule};
pub use repository::EventRepository;
pub use validation::{
    parse_event_date, validate_event_capacity, validate_event_name, validate_event_schedule,
    EventValidationError,
};
