use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ErrorField;

/// Field-specific error entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the field that caused the error
    pub field: String,
    /// Human-readable error message for this field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ErrorField> for FieldError {
    fn from(field: ErrorField) -> Self {
        Self::new(field.field, field.message)
    }
}

impl From<&ErrorField> for FieldError {
    fn from(field: &ErrorField) -> Self {
        Self::new(field.field.as_str(), field.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_error() {
        let fe = FieldError::new("exampleField", "exampleMessage");
        assert_eq!(fe.field, "exampleField");
        assert_eq!(fe.message, "exampleMessage");
    }

    #[test]
    fn test_empty_strings_allowed() {
        let fe = FieldError::new("", "");
        assert!(fe.field.is_empty());
        assert!(fe.message.is_empty());
    }

    #[test]
    fn test_serialization_keys() {
        let json = serde_json::to_value(FieldError::new("email", "required")).unwrap();
        assert_eq!(json, serde_json::json!({"field": "email", "message": "required"}));
    }

    #[test]
    fn test_from_error_field() {
        let source = ErrorField::new("age", "must be positive");
        assert_eq!(
            FieldError::from(&source),
            FieldError::new("age", "must be positive")
        );
        assert_eq!(FieldError::from(source).field, "age");
    }
}
