//! Identifier pattern checks.
//!
//! Both the employee identifier and a technician's manager identifier must
//! match `^[MTC][0-9]{5}$`. They fail with different messages so callers can
//! tell which column was wrong.

use crate::error::{ImportError, ImportResult};
use crate::models::EmployeeId;

/// The pattern every identifier must match, as shown in diagnostics.
pub const IDENTIFIER_PATTERN: &str = "^[MTC][0-9]{5}$";

/// Returns true if `value` is one of `M`, `T`, `C` followed by exactly five digits.
///
/// # Examples
///
/// ```
/// use employee_import::validation::is_valid_identifier;
///
/// assert!(is_valid_identifier("M00001"));
/// assert!(!is_valid_identifier("M0001"));
/// assert!(!is_valid_identifier("Z00001"));
/// ```
pub fn is_valid_identifier(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6
        && matches!(bytes[0], b'M' | b'T' | b'C')
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Validates the identifier column of a line.
pub fn validate_identifier(value: &str) -> ImportResult<EmployeeId> {
    value.parse()
}

/// Validates the manager identifier column of a technician line.
pub fn validate_manager_identifier(value: &str) -> ImportResult<EmployeeId> {
    value
        .parse()
        .map_err(|_| ImportError::InvalidManagerIdentifier {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_each_variant_letter() {
        for id in ["M12345", "T00000", "C99999"] {
            assert!(is_valid_identifier(id), "{} should be valid", id);
        }
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        for id in [
            "", "M", "M1234", "M123456", "m12345", "X12345", "M1234a", " M12345", "M12345 ",
            "M١٢٣٤٥",
        ] {
            assert!(!is_valid_identifier(id), "{:?} should be invalid", id);
        }
    }

    #[test]
    fn test_validate_identifier_carries_value() {
        assert_eq!(
            validate_identifier("Q00001"),
            Err(ImportError::InvalidIdentifier {
                value: "Q00001".to_string()
            })
        );
    }

    #[test]
    fn test_validate_manager_identifier_uses_its_own_message() {
        assert_eq!(
            validate_manager_identifier("Z99"),
            Err(ImportError::InvalidManagerIdentifier {
                value: "Z99".to_string()
            })
        );
        assert_eq!(
            validate_manager_identifier("M00001").unwrap().as_str(),
            "M00001"
        );
    }

    #[test]
    fn test_messages_show_the_pattern() {
        for err in [
            validate_identifier("M1").unwrap_err(),
            validate_manager_identifier("M1").unwrap_err(),
        ] {
            assert!(err.to_string().ends_with(IDENTIFIER_PATTERN), "{}", err);
        }
    }

    proptest! {
        #[test]
        fn prop_generated_identifiers_are_valid(id in "[MTC][0-9]{5}") {
            prop_assert!(is_valid_identifier(&id));
            let parsed = validate_identifier(&id).unwrap();
            prop_assert_eq!(parsed.as_str(), id.as_str());
        }

        #[test]
        fn prop_other_leading_letters_are_rejected(id in "[A-BD-LN-SU-Z][0-9]{5}") {
            prop_assert!(!is_valid_identifier(&id));
        }
    }
}
