//! Technician record builder.

use crate::batch::ManagerIndex;
use crate::error::ImportResult;
use crate::models::{EmployeeKind, Technician};
use crate::store::ManagerLookup;
use crate::validation::{parse_grade, validate_manager_identifier};

use super::common::{build_common_fields, check_arity};

/// Builds a technician from a seven-field line.
///
/// The grade (field 5) and the manager identifier (field 6) are checked
/// before the common fields. The manager is resolved against managers built
/// earlier in the batch first, then through `lookup`.
pub fn build_technician(
    fields: &[&str],
    managers: &ManagerIndex,
    lookup: &dyn ManagerLookup,
) -> ImportResult<Technician> {
    check_arity(fields, EmployeeKind::Technician)?;

    let grade = parse_grade(fields[5])?;
    let manager_id = validate_manager_identifier(fields[6])?;
    let manager = managers.resolve(manager_id, lookup)?;
    let info = build_common_fields(fields)?;

    Ok(Technician {
        info,
        grade,
        manager: Some(manager),
    })
}
