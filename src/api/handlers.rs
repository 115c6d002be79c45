//! HTTP request handlers for the import API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::import_into;
use crate::store::TextSource;

use super::request::ImportRequest;
use super::response::{ApiError, ApiErrorResponse, EmployeesResponse, ImportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/import", post(import_handler))
        .route("/employees", get(employees_handler))
        .with_state(state)
}

/// Handler for POST /import.
///
/// Runs a batch over the request content, persists the accepted records and
/// returns them along with a diagnostic per rejected line. With a snapshot
/// configured, the shared store is only updated once the snapshot is written.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing import request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::new("MALFORMED_JSON", body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::new("MALFORMED_JSON", format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::new("MALFORMED_JSON", "Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let source_name = request.source_name().to_string();
    let source = TextSource::new(source_name, request.content);
    let mut store = state.store().lock().await;
    let mut staged = store.clone();

    let result = import_into(&source, &mut staged).and_then(|report| {
        if let Some(path) = state.snapshot_path() {
            staged.save(path)?;
        }
        Ok(report)
    });

    match result {
        Ok(report) => {
            *store = staged;
            info!(
                correlation_id = %correlation_id,
                source = %report.source,
                imported = report.imported(),
                rejected = report.rejected(),
                "Import completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ImportResponse::from_report(correlation_id, report)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Import failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn employees_handler(State(state): State<AppState>) -> Json<EmployeesResponse> {
    let store = state.store().lock().await;
    let employees: Vec<_> = store.employees().cloned().collect();
    Json(EmployeesResponse {
        count: employees.len(),
        employees,
    })
}
