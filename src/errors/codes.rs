use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Status code used when a raised error carries no code of its own
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// Well-known error kinds and the HTTP status each maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed request
    BadRequest,

    /// Missing or invalid credentials
    Unauthorized,

    /// Authenticated but not allowed
    Forbidden,

    /// Resource does not exist
    NotFound,

    /// Resource state conflicts with the request
    Conflict,

    /// Request was well-formed but failed field checks
    UnprocessableEntity,

    /// Too many requests / rate limit exceeded
    TooManyRequests,

    /// Internal server error
    Internal,

    /// Dependency unavailable
    ServiceUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::UnprocessableEntity => write!(f, "UNPROCESSABLE_ENTITY"),
            Self::TooManyRequests => write!(f, "TOO_MANY_REQUESTS"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

impl ErrorKind {
    /// Get HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
            Self::Internal => DEFAULT_ERROR_CODE,
            Self::ServiceUnavailable => 503,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::TooManyRequests.status_code(), 429);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_error_kind_display_matches_serde() {
        let kind = ErrorKind::UnprocessableEntity;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind));
    }
}
