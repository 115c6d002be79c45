//! Field validation for the employee import engine.
//!
//! Stateless parse functions for identifiers, hire dates, monetary amounts
//! and integers. Each returns the typed value or a classified [`ImportError`]
//! carrying the offending text.
//!
//! [`ImportError`]: crate::error::ImportError

mod date;
mod identifier;
mod number;

pub use date::{HIRE_DATE_FORMAT, parse_hire_date};
pub use identifier::{
    IDENTIFIER_PATTERN, is_valid_identifier, validate_identifier, validate_manager_identifier,
};
pub use number::{parse_amount, parse_grade, parse_integer};
