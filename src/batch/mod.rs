//! Batch processing for the employee import engine.
//!
//! This module contains the line classifier, the in-batch manager index and
//! the orchestrator that runs a whole source, isolating per-line failures.

mod classifier;
mod index;
mod orchestrator;
mod report;

pub use classifier::{classify, dispatch};
pub use index::ManagerIndex;
pub use orchestrator::{BatchImporter, import_into};
pub use report::{BatchReport, Diagnostic, LineDiagnostic};
