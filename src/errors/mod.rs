//! Classified errors and the status codes they map to

pub mod classified;
pub mod codes;

pub use classified::{error_code, error_fields, ClassifiedError, ErrorClass, ErrorField};
pub use codes::{ErrorKind, DEFAULT_ERROR_CODE};
