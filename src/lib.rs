//! Eventdesk
//!
//! Event management backend: CRUD over events, venues, lectures and user
//! accounts, with JWT authentication and role-based access. Persistence
//! goes through repository contracts backed either by PostgreSQL JSONB
//! document collections or by in-memory collections for development and
//! tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::event::Event;
use domain::lecture::Lecture;
use domain::storage::Storage;
use domain::user::User;
use domain::venue::Venue;
use infrastructure::auth::JwtService;
use infrastructure::event::{EventService, StorageEventRepository};
use infrastructure::lecture::{LectureService, StorageLectureRepository};
use infrastructure::storage::{connect_pool, InMemoryStorage, PostgresConfig, PostgresStorage};
use infrastructure::user::{Argon2Hasher, StorageUserRepository, UserService};
use infrastructure::venue::{StorageVenueRepository, VenueService};

/// Collections the application persists
struct Collections {
    events: Arc<dyn Storage<Event>>,
    venues: Arc<dyn Storage<Venue>>,
    lectures: Arc<dyn Storage<Lecture>>,
    users: Arc<dyn Storage<User>>,
}

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with a custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt_service = Arc::new(build_jwt_service(config)?);
    let collections = build_collections(config).await?;

    let event_repository = Arc::new(StorageEventRepository::new(collections.events));
    let venue_repository = Arc::new(StorageVenueRepository::new(collections.venues));
    let lecture_repository = Arc::new(StorageLectureRepository::new(collections.lectures));
    let user_repository = Arc::new(StorageUserRepository::new(collections.users));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        Arc::new(Argon2Hasher::new()),
    ));

    Ok(AppState {
        event_service: Arc::new(EventService::new(event_repository)),
        lecture_service: Arc::new(LectureService::new(lecture_repository)),
        venue_service: Arc::new(VenueService::new(venue_repository, user_repository)),
        user_service,
        jwt_service,
    })
}

fn build_jwt_service(config: &AppConfig) -> anyhow::Result<JwtService> {
    let auth = &config.auth;

    match (&auth.jwt_private_key, &auth.jwt_public_key) {
        (Some(private_key), Some(public_key)) => {
            info!("Signing tokens with RS256");
            Ok(JwtService::from_base64_pem(
                private_key,
                public_key,
                auth.token_expiration_hours,
            )?)
        }
        _ => {
            info!("Signing tokens with HS256 shared secret");
            Ok(JwtService::from_secret(
                &auth.jwt_secret,
                auth.token_expiration_hours,
            ))
        }
    }
}

async fn build_collections(config: &AppConfig) -> anyhow::Result<Collections> {
    match config.storage.backend.as_str() {
        "postgres" => {
            let url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&PostgresConfig::new(url)).await?;
            info!("PostgreSQL connection established");

            let events = PostgresStorage::<Event>::new(pool.clone(), "events");
            let venues = PostgresStorage::<Venue>::new(pool.clone(), "venues");
            let lectures = PostgresStorage::<Lecture>::new(pool.clone(), "lectures");
            let users = PostgresStorage::<User>::new(pool, "users");

            events.ensure_collection().await?;
            venues.ensure_collection().await?;
            lectures.ensure_collection().await?;
            users.ensure_collection().await?;

            Ok(Collections {
                events: Arc::new(events),
                venues: Arc::new(venues),
                lectures: Arc::new(lectures),
                users: Arc::new(users),
            })
        }
        _ => {
            info!("Using in-memory storage");
            Ok(Collections {
                events: Arc::new(InMemoryStorage::<Event>::new()),
                venues: Arc::new(InMemoryStorage::<Venue>::new()),
                lectures: Arc::new(InMemoryStorage::<Lecture>::new()),
                users: Arc::new(InMemoryStorage::<User>::new()),
            })
        }
    }
}
