//! Response types for the import API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::batch::{BatchReport, Diagnostic};
use crate::error::ImportError;
use crate::models::Employee;

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Stable error code, e.g. `MALFORMED_JSON`.
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// The underlying error text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body without details.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches the underlying error text.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// An import request only fails as a whole on the server side: rejected
/// lines are reported in a successful body.
impl From<ImportError> for ApiErrorResponse {
    fn from(error: ImportError) -> Self {
        let body = match &error {
            ImportError::Persistence { .. } => {
                ApiError::new("PERSISTENCE_ERROR", "Employees could not be persisted")
            }
            _ => ApiError::new("IMPORT_ERROR", "The import could not be completed"),
        };
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: body.details(error.to_string()),
        }
    }
}

/// Response body for the `/import` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    /// Identifier correlating this response with the service logs.
    pub correlation_id: Uuid,
    /// Name of the imported source.
    pub source: String,
    /// Number of lines read.
    pub lines_read: usize,
    /// Number of records persisted.
    pub imported: usize,
    /// Number of lines rejected.
    pub rejected: usize,
    /// The persisted records, in source order.
    pub employees: Vec<Employee>,
    /// One entry per rejected line.
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportResponse {
    /// Builds the response body from a finished batch.
    pub fn from_report(correlation_id: Uuid, report: BatchReport) -> Self {
        Self {
            correlation_id,
            imported: report.imported(),
            rejected: report.rejected(),
            source: report.source,
            lines_read: report.lines_read,
            employees: report.employees,
            diagnostics: report.diagnostics,
        }
    }
}

/// Response body for the `/employees` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeesResponse {
    /// Number of stored employees.
    pub count: usize,
    /// Stored employees in identifier order.
    pub employees: Vec<Employee>,
}
