//! Outcome of a batch run: the accepted records plus a diagnostic per rejection.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ImportError;
use crate::models::Employee;

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Why a single line was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDiagnostic {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The line-local failure.
    #[serde(rename = "reason", serialize_with = "serialize_display")]
    pub error: ImportError,
    /// The original line text.
    pub line: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {} : {} => {}", self.line_number, self.error, self.line)
    }
}

/// A problem reported during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The source could not be read; nothing was imported.
    SourceUnavailable {
        /// The acquisition failure.
        #[serde(rename = "reason", serialize_with = "serialize_display")]
        error: ImportError,
    },
    /// One line was rejected; the run continued.
    RejectedLine(LineDiagnostic),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SourceUnavailable { error } => write!(f, "{}", error),
            Diagnostic::RejectedLine(line) => write!(f, "{}", line),
        }
    }
}

/// The result of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Name of the line source.
    pub source: String,
    /// Number of lines read from the source.
    pub lines_read: usize,
    /// Validated records, in source order.
    pub employees: Vec<Employee>,
    /// Diagnostics, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchReport {
    /// Builds the report of a run whose source could not be acquired.
    pub fn source_unavailable(source: String, error: ImportError) -> Self {
        Self {
            source,
            lines_read: 0,
            employees: Vec::new(),
            diagnostics: vec![Diagnostic::SourceUnavailable { error }],
        }
    }

    /// Returns true if the run aborted because its source was unavailable.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self.diagnostics.first(),
            Some(Diagnostic::SourceUnavailable { .. })
        )
    }

    /// Iterates over the rejected-line diagnostics.
    pub fn rejected_lines(&self) -> impl Iterator<Item = &LineDiagnostic> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::RejectedLine(line) => Some(line),
            Diagnostic::SourceUnavailable { .. } => None,
        })
    }

    /// Number of records accepted.
    pub fn imported(&self) -> usize {
        self.employees.len()
    }

    /// Number of lines rejected.
    pub fn rejected(&self) -> usize {
        self.rejected_lines().count()
    }
}
