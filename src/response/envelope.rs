use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use tracing::{debug, warn};

use super::detail::ErrorDetail;
use crate::errors::{ErrorClass, DEFAULT_ERROR_CODE};
use crate::metrics::ENVELOPE_ERRORS_TOTAL;

/// Standard API response: status code, optional error, optional payload.
///
/// `error` and `data` are skipped in JSON when absent; nothing stops both
/// from being set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// HTTP status code
    pub code: u16,
    /// Error details, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    /// Response payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            code: 0,
            error: None,
            data: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Code 0, no error, no data
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 with `data`
    pub fn success(data: T) -> Self {
        let mut envelope = Self::new();
        envelope.set_status(StatusCode::OK).set_data(data);
        envelope
    }

    /// Envelope derived entirely from a raised error
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut envelope = Self::new();
        envelope.set_error_from_error(Some(err));
        envelope
    }

    pub fn set_code(&mut self, code: u16) -> &mut Self {
        self.code = code;
        self
    }

    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.set_code(status.as_u16())
    }

    pub fn set_data(&mut self, data: T) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// Attach a pre-built detail, or clear it with `None`
    pub fn set_error(&mut self, error: Option<ErrorDetail>) -> &mut Self {
        self.error = error;
        self
    }

    /// Set code and error from a raised error.
    ///
    /// Classified errors answer with their own code (unless it is 0);
    /// everything else answers with [`DEFAULT_ERROR_CODE`]. The detail is
    /// re-derived through [`ErrorDetail::populate_from_error`]. `None` leaves
    /// the envelope untouched, code included.
    pub fn set_error_from_error(&mut self, err: Option<&(dyn StdError + 'static)>) -> &mut Self {
        let Some(err) = err else {
            return self;
        };

        self.code = DEFAULT_ERROR_CODE;

        let class = ErrorClass::of(err);
        match class {
            ErrorClass::Classified(classified) => {
                if classified.code != 0 {
                    self.code = classified.code;
                }
                debug!(
                    code = self.code,
                    message = %classified.message,
                    fields = classified.fields.len(),
                    "Classified error"
                );
            }
            ErrorClass::Generic(generic) => {
                warn!(code = self.code, error = %generic, "Unclassified error");
            }
        }
        ENVELOPE_ERRORS_TOTAL.with_label_values(&[class.label()]).inc();

        let mut detail = ErrorDetail::new();
        detail.populate_from_error(Some(err));
        self.error = Some(detail);

        self
    }
}

/// Answers with the envelope code as the HTTP status. Codes that are not a
/// valid status, or are informational (1xx) and so cannot carry a body, go
/// out as 500; the JSON body keeps the original code.
impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = match StatusCode::from_u16(self.code) {
            Ok(status) if !status.is_informational() => status,
            _ => {
                warn!(code = self.code, "Envelope code is not a usable HTTP status");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(self)).into_response()
    }
}
