//! Line classification and dispatch to the record builders.

use crate::builders::{build_manager, build_sales_rep, build_technician, split_fields};
use crate::error::{ImportError, ImportResult};
use crate::models::{Employee, EmployeeKind};
use crate::store::ManagerLookup;

use super::index::ManagerIndex;

/// Determines the employee variant from a line's first character.
///
/// # Examples
///
/// ```
/// use employee_import::batch::classify;
/// use employee_import::models::EmployeeKind;
///
/// assert_eq!(classify("C00003,Fox").unwrap(), EmployeeKind::SalesRep);
/// assert_eq!(
///     classify("X00005,Who").unwrap_err().to_string(),
///     "unrecognized employee type: X"
/// );
/// ```
pub fn classify(line: &str) -> ImportResult<EmployeeKind> {
    let first = line.chars().next();
    first
        .and_then(EmployeeKind::from_discriminator)
        .ok_or_else(|| ImportError::UnknownEmployeeType {
            discriminator: first.map(String::from).unwrap_or_default(),
        })
}

/// Classifies a line and builds the matching record.
pub fn dispatch(
    line: &str,
    managers: &ManagerIndex,
    lookup: &dyn ManagerLookup,
) -> ImportResult<Employee> {
    let kind = classify(line)?;
    let fields = split_fields(line);

    let employee: Employee = match kind {
        EmployeeKind::SalesRep => build_sales_rep(&fields)?.into(),
        EmployeeKind::Manager => build_manager(&fields)?.into(),
        EmployeeKind::Technician => build_technician(&fields, managers, lookup)?.into(),
    };
    Ok(employee)
}
