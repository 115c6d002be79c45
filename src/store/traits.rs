//! Collaborator contracts consumed by the batch orchestrator.

use crate::error::ImportResult;
use crate::models::{Employee, EmployeeId, Manager};

/// Produces the raw lines of an import, in order.
pub trait LineSource {
    /// A human readable name for logs and diagnostics.
    fn describe(&self) -> String;

    /// Reads every line. Failing here is the only run-fatal error.
    fn read_lines(&self) -> ImportResult<Vec<String>>;
}

/// Resolves managers that were persisted by earlier runs.
pub trait ManagerLookup {
    /// Returns the manager with this identifier, if one exists.
    fn find_manager(&self, id: &EmployeeId) -> Option<Manager>;
}

/// Receives the validated records of a completed run.
pub trait EmployeeSink {
    /// Persists all employees, returning how many were stored.
    fn save_all(&mut self, employees: Vec<Employee>) -> ImportResult<usize>;
}
