use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use utoipa::ToSchema;

use super::field::FieldError;
use crate::errors::{ClassifiedError, ErrorClass};

/// Error details attached to an [`Envelope`](super::Envelope)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,
    /// Field-specific errors; omitted from JSON when empty
    #[serde(
        rename = "error_fields",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub fields: Vec<FieldError>,
}

impl ErrorDetail {
    /// Empty message, empty field list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detail straight from a raised error
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut detail = Self::new();
        detail.populate_from_error(Some(err));
        detail
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Append field errors after the existing ones
    pub fn add_fields<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = FieldError>,
    {
        self.fields.extend(fields);
        self
    }

    /// Fill message and fields from a raised error.
    ///
    /// A classified error replaces both the message and the whole field list
    /// (with an empty list when it carries no fields). Any other error only
    /// sets the message to its `Display` text. `None` leaves the detail as is.
    pub fn populate_from_error(&mut self, err: Option<&(dyn StdError + 'static)>) -> &mut Self {
        let Some(err) = err else {
            return self;
        };

        match ErrorClass::of(err) {
            ErrorClass::Classified(classified) => self.map_from_classified(classified),
            ErrorClass::Generic(generic) => self.set_message(generic.to_string()),
        }
    }

    fn map_from_classified(&mut self, classified: &ClassifiedError) -> &mut Self {
        self.message = classified.message.clone();
        self.fields = classified.fields.iter().map(FieldError::from).collect();
        self
    }
}

impl From<&ClassifiedError> for ErrorDetail {
    fn from(classified: &ClassifiedError) -> Self {
        let mut detail = Self::new();
        detail.map_from_classified(classified);
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> Vec<FieldError> {
        pairs.iter().map(|(f, m)| FieldError::new(*f, *m)).collect()
    }

    #[test]
    fn test_new_error_detail() {
        let detail = ErrorDetail::new();
        assert_eq!(detail.message, "");
        assert_eq!(detail.fields.len(), 0);
        assert_eq!(detail, ErrorDetail::default());
    }

    #[test]
    fn test_set_message() {
        let mut detail = ErrorDetail::new();
        detail.set_message("message");
        assert_eq!(detail.message, "message");
        assert!(detail.fields.is_empty());

        detail.set_message("");
        assert_eq!(detail.message, "");
    }

    #[test]
    fn test_add_fields_single_and_multiple() {
        let mut detail = ErrorDetail::new();
        detail.add_fields([FieldError::new("email", "email is required")]);
        assert_eq!(detail.fields, fields(&[("email", "email is required")]));

        detail.add_fields(fields(&[
            ("password", "password is too short"),
            ("age", "age must be positive"),
        ]));
        assert_eq!(
            detail.fields,
            fields(&[
                ("email", "email is required"),
                ("password", "password is too short"),
                ("age", "age must be positive"),
            ])
        );
    }

    #[test]
    fn test_add_fields_empty_is_noop() {
        let mut detail = ErrorDetail::new();
        detail.add_fields([FieldError::new("name", "required")]);
        let before = detail.clone();

        detail.add_fields(std::iter::empty());
        detail.add_fields(Vec::new());
        assert_eq!(detail, before);
    }

    #[test]
    fn test_add_fields_chained_equals_single_call() {
        let a = FieldError::new("name", "name is required");
        let b = FieldError::new("email", "email format is invalid");

        let mut chained = ErrorDetail::new();
        chained.add_fields([a.clone()]).add_fields([b.clone()]);

        let mut single = ErrorDetail::new();
        single.add_fields([a, b]);

        assert_eq!(chained, single);
    }

    #[test]
    fn test_setters_return_same_instance() {
        let mut detail = ErrorDetail::new();
        let ptr: *const ErrorDetail = &detail;

        assert!(std::ptr::eq(detail.set_message("m"), ptr));
        assert!(std::ptr::eq(
            detail.add_fields([FieldError::new("f", "m")]),
            ptr
        ));
        let err = std::io::Error::other("test");
        assert!(std::ptr::eq(detail.populate_from_error(Some(&err)), ptr));
    }

    #[test]
    fn test_populate_from_none_is_noop() {
        let mut detail = ErrorDetail::new();
        detail
            .set_message("kept")
            .add_fields([FieldError::new("f", "m")]);
        let before = detail.clone();

        detail.populate_from_error(None);
        assert_eq!(detail, before);
    }

    #[test]
    fn test_populate_from_classified_without_fields() {
        let err = ClassifiedError::new(400, "message");
        let mut detail = ErrorDetail::new();
        detail.populate_from_error(Some(&err));

        assert_eq!(detail.message, "message");
        assert_eq!(detail.fields.len(), 0);
    }

    #[test]
    fn test_populate_from_classified_with_fields_keeps_order() {
        let err = ClassifiedError::new(422, "validation failed")
            .with_field("username", "username is taken")
            .with_field("email", "email is invalid")
            .with_field("password", "password is too weak");

        let detail = ErrorDetail::from_error(&err);
        assert_eq!(detail.message, "validation failed");
        assert_eq!(
            detail.fields,
            fields(&[
                ("username", "username is taken"),
                ("email", "email is invalid"),
                ("password", "password is too weak"),
            ])
        );
    }

    #[test]
    fn test_populate_from_classified_discards_stale_fields() {
        let mut detail = ErrorDetail::new();
        detail.add_fields([FieldError::new("stale", "old")]);

        detail.populate_from_error(Some(&ClassifiedError::bad_request("fresh")));
        assert_eq!(detail.message, "fresh");
        assert!(detail.fields.is_empty());
    }

    #[test]
    fn test_populate_from_generic_error() {
        let err = std::io::Error::other("message");
        let detail = ErrorDetail::from_error(&err);

        assert_eq!(detail.message, "message");
        assert!(detail.fields.is_empty());
    }

    #[test]
    fn test_populate_from_generic_keeps_existing_fields() {
        let mut detail = ErrorDetail::new();
        detail.add_fields([FieldError::new("a", "b")]);

        detail.populate_from_error(Some(&std::io::Error::other("x")));
        assert_eq!(detail.message, "x");
        assert_eq!(detail.fields, fields(&[("a", "b")]));
    }

    #[test]
    fn test_from_classified_ref() {
        let err = ClassifiedError::unprocessable("bad").with_field("a", "b");
        let detail = ErrorDetail::from(&err);
        assert_eq!(detail, ErrorDetail::from_error(&err));
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let mut detail = ErrorDetail::new();
        detail.set_message("message");
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({"message": "message"})
        );

        detail.add_fields([FieldError::new("email", "required")]);
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "message": "message",
                "error_fields": [{"field": "email", "message": "required"}]
            })
        );
    }

    #[test]
    fn test_deserialize_without_error_fields() {
        let detail: ErrorDetail = serde_json::from_value(json!({"message": "m"})).unwrap();
        assert_eq!(detail.message, "m");
        assert!(detail.fields.is_empty());
    }
}
