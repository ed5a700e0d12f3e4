//! Login endpoint

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Login request
#[derive(Debug, Deserialize)]
pub struct CreateSessionBody {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct SessionEnvelope {
    pub access_token: String,
}

/// POST /sessions
///
/// Wrong password and unknown email come back identical: 401 with the use
/// case's single wrong-credentials message.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionBody>,
) -> Result<(StatusCode, Json<SessionEnvelope>), ApiError> {
    debug!(email = %body.email, "Authenticating");

    let user = state
        .user_service
        .authenticate(&body.email, &body.password)
        .await?;

    let access_token = state.jwt_service.generate(&user)?;

    Ok((StatusCode::CREATED, Json(SessionEnvelope { access_token })))
}
