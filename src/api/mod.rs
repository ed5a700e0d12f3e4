//! HTTP API layer
//!
//! Thin handlers: parse the request, invoke a use case, wrap the result in
//! its resource envelope or map the failure to a status code.

pub mod events;
pub mod health;
pub mod lectures;
pub mod middleware;
pub mod router;
pub mod sessions;
pub mod state;
pub mod types;
pub mod users;
pub mod venues;

pub use router::create_router;
pub use state::AppState;
