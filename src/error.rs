//! Error types for the employee import engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a batch run can hit, from configuration loading down
//! to a single malformed field on one input line.

use thiserror::Error;

use crate::models::{EmployeeKind, TechnicianError};
use crate::validation::IDENTIFIER_PATTERN;

/// The main error type for the employee import engine.
///
/// Line-local variants (field, arity, type and manager resolution failures)
/// are turned into diagnostics by the batch orchestrator and never abort a
/// run. [`ImportError::SourceUnavailable`] is the only run-fatal variant.
///
/// # Example
///
/// ```
/// use employee_import::error::ImportError;
///
/// let error = ImportError::UnknownEmployeeType {
///     discriminator: "X".to_string(),
/// };
/// assert_eq!(error.to_string(), "unrecognized employee type: X");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The line source could not be opened or read.
    #[error("Problem opening the source '{source_name}': {message}")]
    SourceUnavailable {
        /// A human readable name for the source (usually a file path).
        source_name: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// The leading character of a line is not a known employee discriminator.
    #[error("unrecognized employee type: {discriminator}")]
    UnknownEmployeeType {
        /// The offending leading character, empty for a blank line.
        discriminator: String,
    },

    /// A line does not carry the exact number of fields its variant expects.
    #[error("{kind} line must contain {expected} fields but has {found}")]
    FieldCount {
        /// The variant selected by the line's discriminator.
        kind: EmployeeKind,
        /// The field count the variant requires.
        expected: usize,
        /// The field count observed on the line.
        found: usize,
    },

    /// An employee identifier does not match `^[MTC][0-9]{5}$`.
    #[error(
        "the string {value} does not respect the identifier pattern {pattern}",
        pattern = IDENTIFIER_PATTERN
    )]
    InvalidIdentifier {
        /// The offending identifier.
        value: String,
    },

    /// The manager identifier of a technician line does not match the pattern.
    #[error(
        "manager identifier {value} does not respect the pattern {pattern}",
        pattern = IDENTIFIER_PATTERN
    )]
    InvalidManagerIdentifier {
        /// The offending manager identifier.
        value: String,
    },

    /// A hire date is not a valid `dd/MM/yyyy` calendar date.
    #[error("{value} does not respect the expected date format dd/MM/yyyy")]
    InvalidDate {
        /// The offending date text.
        value: String,
    },

    /// A monetary field is not a decimal number.
    #[error("{value} is not a valid number for {field}")]
    InvalidNumber {
        /// The offending text.
        value: String,
        /// The field being parsed (e.g. "salary", "annual revenue").
        field: String,
    },

    /// An integer field is not an integer.
    #[error("{value} is not a valid integer for {field}")]
    InvalidInteger {
        /// The offending text.
        value: String,
        /// The field being parsed (e.g. "grade", "performance").
        field: String,
    },

    /// A technician-specific invariant was violated.
    #[error(transparent)]
    Technician(#[from] TechnicianError),

    /// A technician references a manager absent from the batch and the store.
    #[error("manager {id} not found in file or in store")]
    ManagerNotFound {
        /// The unresolved manager identifier.
        id: String,
    },

    /// The persistence sink could not load or store employees.
    #[error("Failed to persist employees to '{path}': {message}")]
    Persistence {
        /// The snapshot path involved.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return ImportError.
pub type ImportResult<T> = Result<T, ImportError>;
