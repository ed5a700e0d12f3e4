//! Event infrastructure

mod repository;
mod service;

pub use repository::StorageEventRepository;
pub use service::{CreateEventRequest, EventService};
