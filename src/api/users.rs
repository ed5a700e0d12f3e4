//! User endpoints: registration, listing, role changes, updates

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{User, UserRole};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to register a new user
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub t_shirt_size: Option<String>,
}

/// Request to change a user's role
#[derive(Debug, Deserialize)]
pub struct ChangeRoleBody {
    pub email: String,
    pub role: UserRole,
}

/// Request to update a user's username and event
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub event: Option<String>,
}

/// Role filter for the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<UserRole>,
}

/// User as exposed over the API - the password hash stays inside
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub registration_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_shirt_size: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            role: user.role(),
            registration_date: user.registration_date().to_rfc3339(),
            event: user.event().map(|e| e.as_str().to_string()),
            phone: user.phone().map(String::from),
            company: user.company().map(String::from),
            job_title: user.job_title().map(String::from),
            interests: user.interests().map(|i| i.to_vec()),
            t_shirt_size: user.t_shirt_size().map(String::from),
        }
    }
}

/// Single-user envelope
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// User-list envelope
#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    debug!(email = %body.email, "Registering user");

    let user = state
        .user_service
        .register(CreateUserRequest {
            username: body.username,
            email: body.email,
            password: body.password,
            role: body.role,
            event: body.event,
            phone: body.phone,
            company: body.company,
            job_title: body.job_title,
            interests: body.interests,
            t_shirt_size: body.t_shirt_size,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            user: UserResponse::from(&user),
        }),
    ))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UsersEnvelope>, ApiError> {
    let users = state.user_service.list(query.role).await?;

    Ok(Json(UsersEnvelope {
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

/// PATCH /user/role
pub async fn change_role(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<ChangeRoleBody>,
) -> Result<Json<UserEnvelope>, ApiError> {
    debug!(email = %body.email, role = %body.role, "Changing role");

    let user = state.user_service.change_role(&body.email, body.role).await?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}

/// PUT /user
pub async fn update_user(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .user_service
        .update(UpdateUserRequest {
            email: body.email,
            username: body.username,
            event: body.event,
        })
        .await?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            UserId::new("user-1"),
            "testuser",
            "test@example.com",
            "super-secret-hash",
            UserRole::Participant,
        );

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();

        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"email\":\"test@example.com\""));
        assert!(json.contains("\"role\":\"participant\""));
    }

    #[test]
    fn test_register_body_defaults() {
        let body: RegisterBody = serde_json::from_str(
            r#"{"username":"u","email":"u@example.com","password":"password123"}"#,
        )
        .unwrap();

        assert!(body.role.is_none());
        assert!(body.event.is_none());
        assert!(body.interests.is_none());
    }

    #[test]
    fn test_role_query_parses() {
        let query: ListUsersQuery = serde_json::from_str(r#"{"role":"staff_leader"}"#).unwrap();
        assert_eq!(query.role, Some(UserRole::StaffLeader));
    }
}
