//! HTTP API module for the employee import engine.
//!
//! This module provides the REST endpoints for importing employee lines
//! and listing the persisted employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ImportRequest;
pub use response::{ApiError, EmployeesResponse, ImportResponse};
pub use state::AppState;
