//! Technician record and the grade invariant it owns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::employee::EmployeeInfo;
use super::identifier::EmployeeId;

/// Lowest grade a technician can hold.
pub const GRADE_MIN: i32 = 1;

/// Highest grade a technician can hold.
pub const GRADE_MAX: i32 = 5;

/// Errors raised by technician-specific invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TechnicianError {
    /// The grade lies outside `GRADE_MIN..=GRADE_MAX`.
    #[error("grade must be between {min} and {max}: {grade}", min = GRADE_MIN, max = GRADE_MAX)]
    GradeOutOfRange {
        /// The rejected grade.
        grade: i32,
    },
}

/// A technician grade, always within `GRADE_MIN..=GRADE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Grade(i32);

impl Grade {
    /// Creates a grade, rejecting values outside the allowed range.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_import::models::Grade;
    ///
    /// assert_eq!(Grade::new(3).unwrap().value(), 3);
    /// assert!(Grade::new(0).is_err());
    /// ```
    pub fn new(grade: i32) -> Result<Self, TechnicianError> {
        if (GRADE_MIN..=GRADE_MAX).contains(&grade) {
            Ok(Self(grade))
        } else {
            Err(TechnicianError::GradeOutOfRange { grade })
        }
    }

    /// Returns the numeric grade.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Grade {
    type Error = TechnicianError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for i32 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

/// Where a technician's manager was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerSource {
    /// Built from an earlier line of the same batch.
    Batch,
    /// Found through the manager lookup (the persistence layer).
    Store,
}

/// A non-owning link from a technician to its manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRef {
    /// The manager's identifier.
    pub id: EmployeeId,
    /// Where the manager was found.
    pub source: ManagerSource,
}

/// A technician: common attributes plus a grade and a managing manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    /// Attributes shared by every employee.
    #[serde(flatten)]
    pub info: EmployeeInfo,
    /// The technician's grade.
    pub grade: Grade,
    /// The technician's manager, if any.
    #[serde(default)]
    pub manager: Option<ManagerRef>,
}
