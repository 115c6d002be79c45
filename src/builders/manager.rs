//! Manager record builder.

use crate::error::ImportResult;
use crate::models::{EmployeeKind, Manager};

use super::common::{build_common_fields, check_arity};

/// Builds a manager from a five-field line.
///
/// # Examples
///
/// ```
/// use employee_import::builders::{build_manager, split_fields};
///
/// let fields = split_fields("M00001,Doe,Jane,01/01/2020,3000");
/// let manager = build_manager(&fields).unwrap();
/// assert_eq!(manager.info.id.as_str(), "M00001");
/// ```
pub fn build_manager(fields: &[&str]) -> ImportResult<Manager> {
    check_arity(fields, EmployeeKind::Manager)?;
    let info = build_common_fields(fields)?;
    Ok(Manager { info })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::split_fields;
    use crate::error::ImportError;
    use rust_decimal::Decimal;

    #[test]
    fn test_build_manager() {
        let manager = build_manager(&split_fields("M00001,Doe,Jane,01/01/2020,3000")).unwrap();
        assert_eq!(manager.info.last_name, "Doe");
        assert_eq!(manager.info.salary, Decimal::new(3000, 0));
    }

    #[test]
    fn test_arity_checked_before_fields() {
        // Seven fields with a broken identifier: the count is reported.
        let result = build_manager(&split_fields("M1,Doe,Jane,01/01/2020,3000,1,2"));
        assert_eq!(
            result,
            Err(ImportError::FieldCount {
                kind: EmployeeKind::Manager,
                expected: 5,
                found: 7,
            })
        );
    }

    #[test]
    fn test_invalid_identifier() {
        let result = build_manager(&split_fields("M0001,Doe,Jane,01/01/2020,3000"));
        assert_eq!(
            result,
            Err(ImportError::InvalidIdentifier {
                value: "M0001".to_string()
            })
        );
    }
}
