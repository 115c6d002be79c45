//! Sales representative record builder.

use crate::error::ImportResult;
use crate::models::{EmployeeKind, SalesRep};
use crate::validation::{parse_amount, parse_integer};

use super::common::{build_common_fields, check_arity};

/// Builds a sales representative from a seven-field line.
///
/// Revenue (field 5) and performance (field 6) are checked before the
/// common fields.
pub fn build_sales_rep(fields: &[&str]) -> ImportResult<SalesRep> {
    check_arity(fields, EmployeeKind::SalesRep)?;

    let annual_revenue = parse_amount(fields[5], "annual revenue")?;
    let performance = parse_integer(fields[6], "performance")?;
    let info = build_common_fields(fields)?;

    Ok(SalesRep {
        info,
        annual_revenue,
        performance,
    })
}
