//! Monetary and integer field parsing.

use rust_decimal::Decimal;

use crate::error::{ImportError, ImportResult};
use crate::models::Grade;

/// Parses a monetary amount.
///
/// Surrounding whitespace is ignored. Digit separators (`3_000`) and values
/// that cannot be held without rounding are rejected. No sign or range check
/// is applied; `field` only names the column in the error message.
///
/// # Examples
///
/// ```
/// use employee_import::validation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("2500.75", "salary").unwrap(), Decimal::new(250075, 2));
/// assert!(parse_amount("12k", "salary").is_err());
/// assert!(parse_amount("3_000", "salary").is_err());
/// ```
pub fn parse_amount(value: &str, field: &str) -> ImportResult<Decimal> {
    let invalid = || ImportError::InvalidNumber {
        value: value.to_string(),
        field: field.to_string(),
    };

    let text = value.trim();
    if text.contains('_') {
        return Err(invalid());
    }
    Decimal::from_str_exact(text).map_err(|_| invalid())
}

/// Parses a plain integer.
pub fn parse_integer(value: &str, field: &str) -> ImportResult<i32> {
    value.parse().map_err(|_| ImportError::InvalidInteger {
        value: value.to_string(),
        field: field.to_string(),
    })
}

/// Parses a technician grade, applying the grade range invariant.
pub fn parse_grade(value: &str) -> ImportResult<Grade> {
    let grade = parse_integer(value, "grade")?;
    Ok(Grade::new(grade)?)
}
