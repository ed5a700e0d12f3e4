//! Lecture infrastructure

mod repository;
mod service;

pub use repository::StorageLectureRepository;
pub use service::{CreateLectureRequest, LectureService};
