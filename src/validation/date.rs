//! Hire date parsing.

use chrono::NaiveDate;

use crate::error::{ImportError, ImportResult};

/// The `chrono` format used for hire dates (`dd/MM/yyyy`).
pub const HIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/MM/yyyy` hire date.
///
/// The day and month must be two digits and the year four digits; the date
/// must also exist on the calendar.
///
/// # Examples
///
/// ```
/// use employee_import::validation::parse_hire_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_hire_date("01/02/2020").unwrap(),
///     NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()
/// );
/// assert!(parse_hire_date("1/2/2020").is_err());
/// ```
pub fn parse_hire_date(value: &str) -> ImportResult<NaiveDate> {
    let invalid = || ImportError::InvalidDate {
        value: value.to_string(),
    };

    if !has_date_shape(value) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, HIRE_DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_hire_date("31/12/2019").unwrap(),
            NaiveDate::from_ymd_opt(2019, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_rejects_impossible_date() {
        assert_eq!(
            parse_hire_date("30/02/2020"),
            Err(ImportError::InvalidDate {
                value: "30/02/2020".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_other_formats() {
        for value in [
            "2020-01-01",
            "01-01-2020",
            "1/01/2020",
            "01/1/2020",
            "01/01/20",
            "01/01/20200",
            "",
            "aa/bb/cccc",
        ] {
            assert!(parse_hire_date(value).is_err(), "{:?} should be rejected", value);
        }
    }

    #[test]
    fn test_error_message_names_format() {
        assert_eq!(
            parse_hire_date("2020/01/01").unwrap_err().to_string(),
            "2020/01/01 does not respect the expected date format dd/MM/yyyy"
        );
    }

    proptest! {
        #[test]
        fn prop_formatted_dates_parse_back(days in 0i64..40_000) {
            let date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + chrono::Duration::days(days);
            let text = date.format(HIRE_DATE_FORMAT).to_string();
            prop_assert_eq!(parse_hire_date(&text).unwrap(), date);
        }
    }
}
