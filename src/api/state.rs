//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::JwtService;
use crate::infrastructure::event::EventService;
use crate::infrastructure::lecture::LectureService;
use crate::infrastructure::user::UserService;
use crate::infrastructure::venue::VenueService;

/// Shared services, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<EventService>,
    pub lecture_service: Arc<LectureService>,
    pub venue_service: Arc<VenueService>,
    pub user_service: Arc<UserService>,
    pub jwt_service: Arc<JwtService>,
}
