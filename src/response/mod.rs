//! Response envelope returned by every API handler

pub mod detail;
pub mod envelope;
pub mod field;

pub use detail::ErrorDetail;
pub use envelope::Envelope;
pub use field::FieldError;
