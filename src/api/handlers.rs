use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use utoipa::ToSchema;

use super::users::{NewUser, User, UserStore};
use crate::errors::ClassifiedError;
use crate::response::{Envelope, ErrorDetail};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub users: UserStore,
    pub instance_id: String,
}

/// Service health payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub instance_id: String,
    pub uptime_seconds: u64,
}

// Concrete envelope shapes for OpenAPI generation
/// Health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// HTTP status code
    pub code: u16,
    /// Error details (omitted on success)
    pub error: Option<ErrorDetail>,
    /// Response data (omitted on error)
    pub data: Option<HealthStatus>,
}

/// Single user response
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// HTTP status code
    pub code: u16,
    /// Error details (omitted on success)
    pub error: Option<ErrorDetail>,
    /// Response data (omitted on error)
    pub data: Option<User>,
}

/// User list response
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// HTTP status code
    pub code: u16,
    /// Error details (omitted on success)
    pub error: Option<ErrorDetail>,
    /// Response data (omitted on error)
    pub data: Option<Vec<User>>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Envelope<HealthStatus> {
    Envelope::success(HealthStatus {
        status: "healthy".to_string(),
        service: "api-envelope".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        instance_id: state.instance_id.clone(),
        uptime_seconds: START_TIME.elapsed().as_secs(),
    })
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UserListResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Envelope<Vec<User>> {
    Envelope::success(state.users.list().await)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = UserResponse)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<u64>) -> Envelope<User> {
    info!("Get user request: id={}", id);

    let mut envelope = Envelope::new();
    match state.users.get(id).await {
        Ok(user) => {
            envelope.set_status(StatusCode::OK).set_data(user);
        }
        Err(e) => {
            envelope.set_error_from_error(Some(&e));
        }
    }
    envelope
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed JSON body", body = UserResponse),
        (status = 409, description = "Email already registered", body = UserResponse),
        (status = 422, description = "Field validation failed", body = UserResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Envelope<User> {
    let mut envelope = Envelope::new();

    let Json(new_user) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = ClassifiedError::new(rejection.status().as_u16(), rejection.body_text());
            envelope.set_error_from_error(Some(&err));
            return envelope;
        }
    };

    match state.users.create(new_user).await {
        Ok(user) => {
            info!("Created user: id={}", user.id);
            envelope.set_status(StatusCode::CREATED).set_data(user);
        }
        Err(e) => {
            envelope.set_error_from_error(Some(&e));
        }
    }
    envelope
}

/// Always fails with an unclassified error
#[utoipa::path(
    get,
    path = "/errors/generic",
    tag = "errors",
    responses(
        (status = 500, description = "Unclassified failure", body = UserResponse)
    )
)]
pub async fn generic_error() -> Envelope<User> {
    let err = std::io::Error::other("database connection failed");
    Envelope::from_error(&err)
}
