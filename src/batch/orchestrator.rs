//! Batch orchestration: read every line, build what validates, report the rest.

use std::time::Instant;

use tracing::{error, info, warn};

use crate::error::ImportResult;
use crate::models::Employee;
use crate::store::{EmployeeSink, LineSource, ManagerLookup};

use super::classifier::dispatch;
use super::index::ManagerIndex;
use super::report::{BatchReport, Diagnostic, LineDiagnostic};

/// Drives batch runs against a manager lookup.
///
/// The importer holds no per-run state: each call to [`BatchImporter::run`]
/// starts from an empty output list and an empty manager index, so running
/// twice over the same source and store yields the same report.
///
/// # Example
///
/// ```
/// use employee_import::batch::BatchImporter;
/// use employee_import::store::{MemoryStore, TextSource};
///
/// let store = MemoryStore::new();
/// let source = TextSource::new(
///     "inline",
///     "M00001,Doe,Jane,01/01/2020,3000\nT00002,Roe,Jim,01/01/2020,2000,3,M00001",
/// );
///
/// let report = BatchImporter::new(&store).run(&source);
/// assert_eq!(report.imported(), 2);
/// assert!(report.diagnostics.is_empty());
/// ```
pub struct BatchImporter<'a> {
    lookup: &'a dyn ManagerLookup,
}

/// State owned by a single run.
struct Batch<'a> {
    lookup: &'a dyn ManagerLookup,
    managers: ManagerIndex,
    employees: Vec<Employee>,
}

impl<'a> Batch<'a> {
    fn new(lookup: &'a dyn ManagerLookup) -> Self {
        Self {
            lookup,
            managers: ManagerIndex::new(),
            employees: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) -> ImportResult<()> {
        let employee = dispatch(line, &self.managers, self.lookup)?;
        if let Employee::Manager(manager) = &employee {
            self.managers.insert(manager.clone());
        }
        self.employees.push(employee);
        Ok(())
    }
}

impl<'a> BatchImporter<'a> {
    /// Creates an importer that resolves out-of-batch managers through `lookup`.
    pub fn new(lookup: &'a dyn ManagerLookup) -> Self {
        Self { lookup }
    }

    /// Runs a batch over every line of `source`.
    ///
    /// A source that cannot be read yields an empty report with a single
    /// [`Diagnostic::SourceUnavailable`]. Otherwise each line is processed in
    /// order; a failing line is logged and recorded, and the run moves on.
    pub fn run(&self, source: &dyn LineSource) -> BatchReport {
        let source_name = source.describe();
        let start_time = Instant::now();
        info!(source = %source_name, "Reading employee file");

        let lines = match source.read_lines() {
            Ok(lines) => lines,
            Err(err) => {
                error!(source = %source_name, error = %err, "Could not open employee file");
                return BatchReport::source_unavailable(source_name, err);
            }
        };
        info!(source = %source_name, lines = lines.len(), "Lines read");

        let mut batch = Batch::new(self.lookup);
        let mut diagnostics = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            if let Err(err) = batch.process_line(line) {
                warn!(
                    line_number,
                    reason = %err,
                    line = %line,
                    "Line rejected"
                );
                diagnostics.push(Diagnostic::RejectedLine(LineDiagnostic {
                    line_number,
                    error: err,
                    line: line.clone(),
                }));
            }
        }

        let managers_indexed = batch.managers.len();
        let report = BatchReport {
            source: source_name,
            lines_read: lines.len(),
            employees: batch.employees,
            diagnostics,
        };

        info!(
            source = %report.source,
            imported = report.imported(),
            rejected = report.rejected(),
            managers_indexed,
            duration_us = start_time.elapsed().as_micros(),
            "Batch completed"
        );
        report
    }
}

/// Runs a batch and hands the accepted records to `sink`.
///
/// The store acts as both collaborators: it resolves managers from earlier
/// runs and receives the output once every line has been attempted. Returns
/// the report; the employees it lists are the ones that were persisted.
pub fn import_into<S>(source: &dyn LineSource, store: &mut S) -> ImportResult<BatchReport>
where
    S: ManagerLookup + EmployeeSink,
{
    let report = BatchImporter::new(&*store).run(source);
    let saved = store.save_all(report.employees.clone())?;
    info!(source = %report.source, saved, "Employees persisted");
    Ok(report)
}
