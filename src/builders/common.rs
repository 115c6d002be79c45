//! Field splitting, arity checks and the attributes shared by every variant.

use crate::error::{ImportError, ImportResult};
use crate::models::{EmployeeInfo, EmployeeKind};
use crate::validation::{parse_amount, parse_hire_date, validate_identifier};

/// Splits a line on commas.
///
/// Trailing empty fields are dropped, so `a,b,,` yields two fields while
/// `a,,b` keeps its empty middle field.
///
/// # Examples
///
/// ```
/// use employee_import::builders::split_fields;
///
/// assert_eq!(split_fields("M00001,Doe,Jane"), vec!["M00001", "Doe", "Jane"]);
/// assert_eq!(split_fields("a,b,,"), vec!["a", "b"]);
/// assert_eq!(split_fields("a,,b"), vec!["a", "", "b"]);
/// ```
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Fails unless `fields` has exactly the count `kind` requires.
pub fn check_arity(fields: &[&str], kind: EmployeeKind) -> ImportResult<()> {
    let expected = kind.expected_fields();
    if fields.len() == expected {
        Ok(())
    } else {
        Err(ImportError::FieldCount {
            kind,
            expected,
            found: fields.len(),
        })
    }
}

/// Builds the common attributes from fields 0 to 4.
///
/// Fields are checked in order (identifier, last name, first name, hire date,
/// salary) and the first failure is returned. Names are kept verbatim.
/// Callers must have checked arity first.
pub fn build_common_fields(fields: &[&str]) -> ImportResult<EmployeeInfo> {
    let id = validate_identifier(fields[0])?;
    let last_name = fields[1].to_string();
    let first_name = fields[2].to_string();
    let hire_date = parse_hire_date(fields[3])?;
    let salary = parse_amount(fields[4], "salary")?;

    Ok(EmployeeInfo {
        id,
        last_name,
        first_name,
        hire_date,
        salary,
    })
}
