//! Errors that carry their own HTTP status code, message and per-field details.
//!
//! Anything else raised by a handler is a generic error: only its `Display`
//! text is known. [`ErrorClass::of`] draws that line by type, never by
//! inspecting the message.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;
use utoipa::ToSchema;

use super::codes::ErrorKind;

/// A single field/message pair carried by a [`ClassifiedError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorField {
    /// Name of the offending field
    pub field: String,
    /// Why the field was rejected
    pub message: String,
}

impl ErrorField {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error with a status code, a message and zero or more field errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[error("{message}")]
pub struct ClassifiedError {
    /// HTTP status code to answer with
    pub code: u16,
    /// Human-readable error message
    pub message: String,
    /// Field-level details, in the order they were added
    #[serde(default)]
    pub fields: Vec<ErrorField>,
}

impl ClassifiedError {
    /// Create a classified error without field details
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Create a classified error for a well-known kind
    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind.status_code(), message)
    }

    /// Append one field detail
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields.push(ErrorField::new(field, message));
        self
    }

    /// Append several field details, keeping their order
    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = ErrorField>,
    {
        self.fields.extend(fields);
        self
    }

    /// Find the first classified error in `err`'s source chain
    pub fn parse<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ClassifiedError> {
        std::iter::successors(Some(err), |&e| e.source())
            .find_map(|e| e.downcast_ref::<ClassifiedError>())
    }
}

/// Helpers for creating common errors
impl ClassifiedError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::Conflict, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::UnprocessableEntity, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::Internal, message)
    }
}

/// Status code carried by `err`, or 0 when it is not classified
pub fn error_code(err: &(dyn StdError + 'static)) -> u16 {
    ClassifiedError::parse(err).map_or(0, |c| c.code)
}

/// Field details carried by `err`; empty when it is not classified
pub fn error_fields<'a>(err: &'a (dyn StdError + 'static)) -> &'a [ErrorField] {
    ClassifiedError::parse(err)
        .map(|c| c.fields.as_slice())
        .unwrap_or_default()
}

/// Which side of the classification boundary a raised error falls on
#[derive(Debug, Clone, Copy)]
pub enum ErrorClass<'a> {
    Classified(&'a ClassifiedError),
    Generic(&'a (dyn StdError + 'static)),
}

impl<'a> ErrorClass<'a> {
    pub fn of(err: &'a (dyn StdError + 'static)) -> Self {
        match ClassifiedError::parse(err) {
            Some(classified) => Self::Classified(classified),
            None => Self::Generic(err),
        }
    }

    /// Metric/log label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Classified(_) => "classified",
            Self::Generic(_) => "generic",
        }
    }
}
