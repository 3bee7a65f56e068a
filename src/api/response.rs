//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies, the error response structures and
//! the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::EngineError;
use crate::models::{AggregateSummary, WorkDateRecord};

/// Body returned by `POST /work-dates`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkDatesResponse {
    /// Records, newest first.
    pub records: Vec<WorkDateRecord>,
    /// Summary over the records, keyed by human-readable labels.
    #[serde(serialize_with = "serialize_labeled")]
    pub summary: AggregateSummary,
}

fn serialize_labeled<S: Serializer>(
    summary: &AggregateSummary,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    summary.labeled().serialize(serializer)
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an empty body error response.
    pub fn empty_body() -> Self {
        Self::with_details(
            "EMPTY_BODY",
            "Request body is empty",
            "Send the attendance workbook as the raw request body",
        )
    }

    /// Creates an invalid query error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::WorkbookDecode { message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "UNREADABLE_WORKBOOK",
                    "The uploaded file could not be read as a workbook",
                    message,
                ),
            ),
            EngineError::MissingWorksheet => ApiErrorResponse::bad_request(ApiError::new(
                "UNREADABLE_WORKBOOK",
                "The uploaded workbook contains no worksheet",
            )),
            EngineError::SheetTooShort { rows, required } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "SHEET_TOO_SHORT",
                    format!(
                        "Sheet has {} rows but the header layout requires at least {}",
                        rows, required
                    ),
                    "The first sheet does not match the attendance export layout",
                ),
            ),
            EngineError::InvalidRequest { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid request field '{}': {}", field, message),
                    "The request parameters contain invalid information",
                ),
            ),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
