use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{events, health, lectures, sessions, users, venues};

/// Create the application router
///
/// Registration and login are public, as are the listing endpoints; every
/// mutating route requires a bearer token.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Events
        .route("/event", post(events::create_event))
        .route("/events", get(events::list_events))
        // Lectures
        .route("/lecture", post(lectures::create_lecture))
        .route("/lectures", get(lectures::list_lectures))
        // Venues
        .route("/venue", post(venues::create_venue))
        .route("/venues", get(venues::list_venues))
        .route("/venue/leader", patch(venues::change_leader))
        // Users and sessions
        .route("/register", post(users::register))
        .route("/sessions", post(sessions::create_session))
        .route("/users", get(users::list_users))
        .route("/user/role", patch(users::change_role))
        .route("/user", put(users::update_user))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
