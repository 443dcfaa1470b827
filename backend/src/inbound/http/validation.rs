//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use actix_web::error::QueryPayloadError;
use actix_web::web;
use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{Error, TaskId, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidDate,
    InvalidNumber,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const TASK_ID: FieldName = FieldName::new("taskId");
pub(crate) const DUE_DATE: FieldName = FieldName::new("dueDate");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");

fn invalid_value_error(field: FieldName, message: String, code: ErrorCode, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    invalid_value_error(
        field,
        format!("{name} must be a valid UUID"),
        ErrorCode::InvalidUuid,
        value,
    )
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    invalid_value_error(
        field,
        format!("{name} must be a calendar date (YYYY-MM-DD)"),
        ErrorCode::InvalidDate,
        value,
    )
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn parse_task_id(value: &str, field: FieldName) -> Result<TaskId, Error> {
    value
        .parse::<TaskId>()
        .map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    invalid_value_error(
        field,
        format!("{name} must be a non-negative integer"),
        ErrorCode::InvalidNumber,
        value,
    )
}

/// Parse an optional non-negative integer; blank strings count as absent.
///
/// Range checks belong to the service that owns the bound.
pub(crate) fn parse_optional_count(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<usize>, Error> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| invalid_number_error(field, raw)),
    }
}

/// Query extractor configuration rendering failures as the JSON error body.
pub(crate) fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("query string is malformed")
        .with_details(json!({
            "query": req.query_string(),
            "reason": err.to_string(),
            "code": ErrorCode::InvalidQuery.as_str(),
        }))
        .into()
}

/// Parse an optional `YYYY-MM-DD` date; blank strings count as absent.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| invalid_date_error(field, raw)),
    }
}
