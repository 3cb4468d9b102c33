//! HTTP adapter mapping for domain errors.
//!
//! The domain [`Error`] stays transport agnostic; this module decides the
//! status code and body for each [`ErrorCode`]. Bodies follow the
//! `{"error": "<message>"}` contract, except not-found responses which carry
//! no body. Every other failure becomes a 500 that is logged with its trace id
//! and carries a fixed message.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-visible message for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON error envelope returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "name must be unique")]
    pub error: String,
}

impl ErrorBody {
    /// Wrap a client-visible message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show a client for this error.
fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InvalidRequest | ErrorCode::Conflict | ErrorCode::NotFound => error.message(),
        _ => INTERNAL_ERROR_MESSAGE,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                trace_id = self.trace_id(),
                code = ?self.code(),
                message = self.message(),
                "request failed"
            );
        }

        let mut builder = HttpResponseBuilder::new(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if self.code() == ErrorCode::NotFound {
            builder.finish()
        } else {
            builder.json(ErrorBody::new(public_message(self)))
        }
    }
}
