//! Venue use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::event::EventId;
use crate::domain::user::{User, UserRepository};
use crate::domain::venue::{Venue, VenueId, VenueRepository};
use crate::domain::DomainError;

const VENUE_ALREADY_EXISTS: &str = "There is already an venue with the name provided.";
const VENUE_NOT_FOUND: &str = "There is no venue with the name provided.";
const USER_NOT_FOUND: &str = "User not found error.";

/// Request to create a new venue
#[derive(Debug, Clone)]
pub struct CreateVenueRequest {
    pub name: String,
    pub address: String,
    pub capacity: Option<i64>,
    pub event: Option<String>,
    pub staff_leaders: Vec<String>,
}

/// A venue with its staff-leader references resolved
///
/// Dangling references resolve to `None`; listing tolerates them instead of
/// failing, so a deleted user shows up as a null placeholder.
#[derive(Debug, Clone)]
pub struct VenueWithLeaders {
    pub venue: Venue,
    pub staff_leaders: Vec<Option<User>>,
}

/// Venue service
#[derive(Debug)]
pub struct VenueService {
    venues: Arc<dyn VenueRepository>,
    users: Arc<dyn UserRepository>,
}

impl VenueService {
    /// Create a new venue service
    pub fn new(venues: Arc<dyn VenueRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { venues, users }
    }

    /// Create a venue
    ///
    /// The only business rule is name uniqueness (case-sensitive).
    pub async fn create(&self, request: CreateVenueRequest) -> Result<Venue, DomainError> {
        if self.venues.find_by_name(&request.name).await?.is_some() {
            return Err(DomainError::conflict(VENUE_ALREADY_EXISTS));
        }

        let mut venue = Venue::new(VenueId::generate(), request.name, request.address);

        if let Some(capacity) = request.capacity {
            venue = venue.with_capacity(capacity);
        }

        if let Some(event) = request.event {
            venue = venue.with_event(EventId::new(event));
        }

        if !request.staff_leaders.is_empty() {
            venue = venue.with_staff_leaders(
                request
                    .staff_leaders
                    .into_iter()
                    .map(crate::domain::user::UserId::new)
                    .collect(),
            );
        }

        debug!(venue = %venue.id(), "Creating venue");

        self.venues.create(venue).await
    }

    /// List all venues with staff leaders resolved
    pub async fn list(&self) -> Result<Vec<VenueWithLeaders>, DomainError> {
        let venues = self.venues.list().await?;
        let mut listings = Vec::with_capacity(venues.len());

        for venue in venues {
            let mut staff_leaders = Vec::with_capacity(venue.staff_leaders().len());

            for leader_id in venue.staff_leaders() {
                staff_leaders.push(self.users.get(leader_id).await?);
            }

            listings.push(VenueWithLeaders {
                venue,
                staff_leaders,
            });
        }

        Ok(listings)
    }

    /// Replace a venue's staff leaders with a single new leader
    ///
    /// The user is looked up by email and the venue by name; both are exact
    /// matches. The previous leader list is discarded wholesale.
    pub async fn change_leader(&self, email: &str, name: &str) -> Result<Venue, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        let mut venue = self
            .venues
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found(VENUE_NOT_FOUND))?;

        venue.set_staff_leaders(vec![user.id().clone()]);

        debug!(venue = %venue.id(), leader = %user.id(), "Changing venue leader");

        self.venues.update(venue).await
    }
}
