//! Lecture domain

mod entity;
mod repository;

pub use entity::{Lecture, LectureId};
pub use repository::LectureRepository;
