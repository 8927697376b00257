//! # REST API Errors
//!
//! Error types for the framework endpoints and their HTTP mapping.
//!
//! Client errors all become `400 Bad Request` with the envelope
//! `{"errors": [{"field": ..., "message": ...}]}`:
//! - field validation failures, one entry per violation
//! - a single domain rejection on `id`
//! - an unparsable body, as `{"field": "", "message": "JsonParseException"}`
//!
//! Storage failures become `500` with `{"error": ..., "code": 500}`.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::framework::Violation;
use crate::store::StoreError;

/// Message reported for bodies that are not a valid framework payload.
pub const JSON_PARSE_EXCEPTION: &str = "JsonParseException";

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level rule a single field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Path id is not an integer
    NotANumber,
    /// No record with the requested id
    NotFound,
    /// Create payload carries an id that is already stored
    AlreadyExists,
}

impl Rejection {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NotANumber => "NotANumber",
            Rejection::NotFound => "NotFound",
            Rejection::AlreadyExists => "AlreadyExists",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (400)
    // ==================
    /// One or more field constraints failed
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// A single request-level rule failed
    #[error("Rejected {field}: {reason}")]
    Rejected {
        field: &'static str,
        reason: Rejection,
    },

    /// Request body is not a valid framework payload
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    // ==================
    // Server Errors (500)
    // ==================
    /// Record store failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApiError {
    pub fn not_a_number() -> Self {
        Self::Rejected {
            field: "id",
            reason: Rejection::NotANumber,
        }
    }

    pub fn not_found() -> Self {
        Self::Rejected {
            field: "id",
            reason: Rejection::NotFound,
        }
    }

    pub fn already_exists() -> Self {
        Self::Rejected {
            field: "id",
            reason: Rejection::AlreadyExists,
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,

            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The error envelope for client errors; `None` for server faults.
    pub fn envelope(&self) -> Option<ErrorEnvelope> {
        let errors = match self {
            ApiError::Validation(violations) => violations
                .iter()
                .map(|v| FieldError::new(v.field, v.kind.as_str()))
                .collect(),
            ApiError::Rejected { field, reason } => vec![FieldError::new(*field, reason.as_str())],
            ApiError::MalformedBody(_) => vec![FieldError::new("", JSON_PARSE_EXCEPTION)],
            ApiError::Store(_) => return None,
        };
        Some(ErrorEnvelope { errors })
    }
}

/// One entry of the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
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

/// Body of every 400 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<FieldError>,
}

/// Body of server fault responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.envelope() {
            Some(envelope) => (status, Json(envelope)).into_response(),
            None => {
                let body = ErrorResponse {
                    error: self.to_string(),
                    code: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
