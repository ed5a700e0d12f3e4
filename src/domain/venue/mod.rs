//! Venue domain
//!
//! A venue belongs to at most one event and carries the list of its current
//! staff leaders. The list is replaced, never merged, when leadership
//! changes hands.

mod entity;
mod repository;

pub use entity::{Venue, VenueId};
pub use repository::VenueRepository;
