//! Employee identifiers and the variant they encode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::validation::is_valid_identifier;

/// The three employee variants an input line can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Discriminator `M`, five fields.
    Manager,
    /// Discriminator `T`, seven fields.
    Technician,
    /// Discriminator `C`, seven fields.
    SalesRep,
}

impl EmployeeKind {
    /// Maps a line's leading character to a variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_import::models::EmployeeKind;
    ///
    /// assert_eq!(EmployeeKind::from_discriminator('T'), Some(EmployeeKind::Technician));
    /// assert_eq!(EmployeeKind::from_discriminator('X'), None);
    /// ```
    pub fn from_discriminator(c: char) -> Option<Self> {
        match c {
            'M' => Some(EmployeeKind::Manager),
            'T' => Some(EmployeeKind::Technician),
            'C' => Some(EmployeeKind::SalesRep),
            _ => None,
        }
    }

    /// The leading character identifying this variant.
    pub fn discriminator(self) -> char {
        match self {
            EmployeeKind::Manager => 'M',
            EmployeeKind::Technician => 'T',
            EmployeeKind::SalesRep => 'C',
        }
    }

    /// The exact number of comma-separated fields a line of this variant carries.
    pub fn expected_fields(self) -> usize {
        match self {
            EmployeeKind::Manager => 5,
            EmployeeKind::Technician | EmployeeKind::SalesRep => 7,
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmployeeKind::Manager => "manager",
            EmployeeKind::Technician => "technician",
            EmployeeKind::SalesRep => "sales representative",
        };
        f.write_str(name)
    }
}

/// A validated employee identifier: one of `M`, `T`, `C` followed by five digits.
///
/// The only ways to obtain one are [`FromStr`] and deserialization, both of
/// which enforce the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the variant encoded by the leading letter.
    pub fn kind(&self) -> EmployeeKind {
        // The pattern check guarantees a known leading letter.
        match self.0.as_bytes()[0] {
            b'M' => EmployeeKind::Manager,
            b'T' => EmployeeKind::Technician,
            _ => EmployeeKind::SalesRep,
        }
    }
}

impl FromStr for EmployeeId {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_identifier(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ImportError::InvalidIdentifier {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = ImportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_identifier(&value) {
            Ok(Self(value))
        } else {
            Err(ImportError::InvalidIdentifier { value })
        }
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_identifier() {
        let id: EmployeeId = "M00001".parse().unwrap();
        assert_eq!(id.as_str(), "M00001");
        assert_eq!(id.kind(), EmployeeKind::Manager);
    }

    #[test]
    fn test_kind_follows_leading_letter() {
        assert_eq!(
            "T12345".parse::<EmployeeId>().unwrap().kind(),
            EmployeeKind::Technician
        );
        assert_eq!(
            "C54321".parse::<EmployeeId>().unwrap().kind(),
            EmployeeKind::SalesRep
        );
    }

    #[test]
    fn test_parse_rejects_bad_identifier() {
        let result = "X00001".parse::<EmployeeId>();
        assert_eq!(
            result,
            Err(ImportError::InvalidIdentifier {
                value: "X00001".to_string()
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_identifier() {
        let result: Result<EmployeeId, _> = serde_json::from_str("\"M123\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let id: EmployeeId = "C00003".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C00003\"");
    }

    #[test]
    fn test_expected_fields_per_kind() {
        assert_eq!(EmployeeKind::Manager.expected_fields(), 5);
        assert_eq!(EmployeeKind::Technician.expected_fields(), 7);
        assert_eq!(EmployeeKind::SalesRep.expected_fields(), 7);
    }

    #[test]
    fn test_discriminator_round_trips() {
        for kind in [
            EmployeeKind::Manager,
            EmployeeKind::Technician,
            EmployeeKind::SalesRep,
        ] {
            assert_eq!(EmployeeKind::from_discriminator(kind.discriminator()), Some(kind));
        }
    }
}
