use utoipa::OpenApi;

use crate::api::handlers::{HealthResponse, HealthStatus, UserListResponse, UserResponse};
use crate::api::users::{NewUser, User};
use crate::errors::{ClassifiedError, ErrorField, ErrorKind};
use crate::response::{ErrorDetail, FieldError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Envelope",
        version = "0.1.0",
        description = "Demo service answering every request with a standard envelope: a status code, optional error details with per-field errors, and an optional payload.",
        contact(
            name = "API Envelope",
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_users,
        crate::api::handlers::get_user,
        crate::api::handlers::create_user,
        crate::api::handlers::generic_error,
    ),
    components(
        schemas(
            ErrorDetail,
            FieldError,
            ClassifiedError,
            ErrorField,
            ErrorKind,
            HealthStatus,
            HealthResponse,
            User,
            NewUser,
            UserResponse,
            UserListResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User lookup and creation"),
        (name = "errors", description = "Error mapping demonstrations"),
    )
)]
pub struct ApiDoc;
