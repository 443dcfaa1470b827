//! Domain errors rendered as JSON responses.
//!
//! Each [`ErrorCode`] maps to one status code. Internal errors are logged
//! in full and replaced by a generic message; when a request trace is in
//! scope its identifier is returned as `details.traceId` so the client can
//! quote it.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }

    let trace_id = TraceId::current();
    error!(
        message = error.message(),
        details = ?error.details(),
        trace_id = ?trace_id.map(|id| id.to_string()),
        "internal error hidden from client"
    );
    let redacted = Error::internal(INTERNAL_MESSAGE);
    match trace_id {
        Some(id) => redacted.with_details(json!({ "traceId": id.to_string() })),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_MESSAGE)
    }
}
