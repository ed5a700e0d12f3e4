//! Storage backends
//!
//! Two implementations of the generic [`crate::domain::storage::Storage`]
//! contract: an order-preserving in-memory collection for tests and
//! development, and a PostgreSQL JSONB document collection for production.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryStorage;
pub use postgres::{connect_pool, PostgresConfig, PostgresStorage};
