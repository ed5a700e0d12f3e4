//! User infrastructure
//!
//! Registration, authentication, and account maintenance, plus the
//! password-hashing adapter.

pub mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::StorageUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
