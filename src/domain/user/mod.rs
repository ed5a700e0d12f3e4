//! User domain
//!
//! Accounts double as attendee records: besides credentials and role they
//! carry registration metadata and optional profile fields.

mod entity;
mod repository;

pub use entity::{User, UserId, UserRole};
pub use repository::UserRepository;
