// Library exports for the demo server and tests
pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod response;

pub use errors::{ClassifiedError, ErrorField};
pub use response::{Envelope, ErrorDetail, FieldError};
