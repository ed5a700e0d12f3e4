//! Venue infrastructure

mod repository;
mod service;

pub use repository::StorageVenueRepository;
pub use service::{CreateVenueRequest, VenueService, VenueWithLeaders};
