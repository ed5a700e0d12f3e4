//! Venue endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::users::UserResponse;
use crate::domain::venue::Venue;
use crate::infrastructure::venue::{CreateVenueRequest, VenueWithLeaders};

/// Request to create a new venue
#[derive(Debug, Deserialize)]
pub struct CreateVenueBody {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub staff_leaders: Vec<String>,
}

/// Request to change a venue's leader
#[derive(Debug, Deserialize)]
pub struct ChangeLeaderBody {
    /// Email of the new leader
    pub email: String,
    /// Name of the venue
    pub name: String,
}

/// Single-venue envelope
#[derive(Debug, Serialize)]
pub struct VenueEnvelope {
    pub venue: Venue,
}

/// Venue as listed, with staff leaders resolved to users
///
/// A leader reference that no longer resolves is serialized as `null` in
/// its position rather than dropped.
#[derive(Debug, Serialize)]
pub struct VenueListing {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub staff_leaders: Vec<Option<UserResponse>>,
}

impl From<&VenueWithLeaders> for VenueListing {
    fn from(listing: &VenueWithLeaders) -> Self {
        Self {
            id: listing.venue.id().as_str().to_string(),
            name: listing.venue.name().to_string(),
            address: listing.venue.address().to_string(),
            capacity: listing.venue.capacity(),
            event: listing.venue.event().map(|e| e.as_str().to_string()),
            staff_leaders: listing
                .staff_leaders
                .iter()
                .map(|leader| leader.as_ref().map(UserResponse::from))
                .collect(),
        }
    }
}

/// Venue-list envelope
#[derive(Debug, Serialize)]
pub struct VenuesEnvelope {
    pub venues: Vec<VenueListing>,
}

/// POST /venue
pub async fn create_venue(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<CreateVenueBody>,
) -> Result<(StatusCode, Json<VenueEnvelope>), ApiError> {
    debug!(name = %body.name, "Creating venue");

    let venue = state
        .venue_service
        .create(CreateVenueRequest {
            name: body.name,
            address: body.address,
            capacity: body.capacity,
            event: body.event,
            staff_leaders: body.staff_leaders,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(VenueEnvelope { venue })))
}

/// GET /venues
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<VenuesEnvelope>, ApiError> {
    let listings = state.venue_service.list().await?;

    Ok(Json(VenuesEnvelope {
        venues: listings.iter().map(VenueListing::from).collect(),
    }))
}

/// PATCH /venue/leader
pub async fn change_leader(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<ChangeLeaderBody>,
) -> Result<Json<VenueEnvelope>, ApiError> {
    debug!(venue = %body.name, email = %body.email, "Changing venue leader");

    let venue = state
        .venue_service
        .change_leader(&body.email, &body.name)
        .await?;

    Ok(Json(VenueEnvelope { venue }))
}
