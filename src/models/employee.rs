//! Employee model and its three variants.
//!
//! This module defines the attributes shared by every employee and the
//! closed [`Employee`] sum type produced by the record builders.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifier::{EmployeeId, EmployeeKind};
use super::technician::Technician;

/// Attributes common to every employee variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// Identifier whose leading letter encodes the variant.
    pub id: EmployeeId,
    /// Last name, stored verbatim.
    pub last_name: String,
    /// First name, stored verbatim.
    pub first_name: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Base salary.
    pub salary: Decimal,
}

/// A manager. Carries only the common attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    /// Attributes shared by every employee.
    #[serde(flatten)]
    pub info: EmployeeInfo,
}

/// A sales representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    /// Attributes shared by every employee.
    #[serde(flatten)]
    pub info: EmployeeInfo,
    /// Annual revenue brought in by the representative.
    pub annual_revenue: Decimal,
    /// Performance indicator. No range is enforced.
    pub performance: i32,
}

/// A validated employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employee {
    /// A manager record.
    Manager(Manager),
    /// A technician record.
    Technician(Technician),
    /// A sales representative record.
    SalesRep(SalesRep),
}

impl Employee {
    /// Returns the attributes shared by every variant.
    pub fn info(&self) -> &EmployeeInfo {
        match self {
            Employee::Manager(m) => &m.info,
            Employee::Technician(t) => &t.info,
            Employee::SalesRep(c) => &c.info,
        }
    }

    /// Returns the employee's identifier.
    pub fn id(&self) -> &EmployeeId {
        &self.info().id
    }

    /// Returns which variant this record is.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_import::models::{Employee, EmployeeInfo, EmployeeKind, Manager};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let manager = Employee::Manager(Manager {
    ///     info: EmployeeInfo {
    ///         id: "M00001".parse().unwrap(),
    ///         last_name: "Doe".to_string(),
    ///         first_name: "Jane".to_string(),
    ///         hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///         salary: Decimal::new(3000, 0),
    ///     },
    /// });
    /// assert_eq!(manager.kind(), EmployeeKind::Manager);
    /// ```
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Manager(_) => EmployeeKind::Manager,
            Employee::Technician(_) => EmployeeKind::Technician,
            Employee::SalesRep(_) => EmployeeKind::SalesRep,
        }
    }

    /// Returns the manager record if this employee is one.
    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Employee::Manager(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Manager> for Employee {
    fn from(manager: Manager) -> Self {
        Employee::Manager(manager)
    }
}

impl From<Technician> for Employee {
    fn from(technician: Technician) -> Self {
        Employee::Technician(technician)
    }
}

impl From<SalesRep> for Employee {
    fn from(sales_rep: SalesRep) -> Self {
        Employee::SalesRep(sales_rep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, ManagerRef, ManagerSource};

    fn info(id: &str) -> EmployeeInfo {
        EmployeeInfo {
            id: id.parse().unwrap(),
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            salary: Decimal::new(300050, 2),
        }
    }

    #[test]
    fn test_deserialize_manager() {
        let json = r#"{
            "kind": "manager",
            "id": "M00001",
            "last_name": "Doe",
            "first_name": "Jane",
            "hire_date": "2020-01-01",
            "salary": "3000.50"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::Manager(Manager { info: info("M00001") }));
    }

    #[test]
    fn test_technician_serializes_manager_link() {
        let technician = Employee::Technician(Technician {
            info: info("T00002"),
            grade: Grade::new(3).unwrap(),
            manager: Some(ManagerRef {
                id: "M00001".parse().unwrap(),
                source: ManagerSource::Batch,
            }),
        });

        let value = serde_json::to_value(&technician).unwrap();
        assert_eq!(value["kind"], "technician");
        assert_eq!(value["grade"], 3);
        assert_eq!(value["manager"]["id"], "M00001");
        assert_eq!(value["manager"]["source"], "batch");
    }

    #[test]
    fn test_sales_rep_round_trip() {
        let sales_rep = Employee::SalesRep(SalesRep {
            info: info("C00003"),
            annual_revenue: Decimal::new(100000, 0),
            performance: 5,
        });

        let json = serde_json::to_string(&sales_rep).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(sales_rep, deserialized);
    }

    #[test]
    fn test_accessors() {
        let employee: Employee = Manager { info: info("M00009") }.into();
        assert_eq!(employee.id().as_str(), "M00009");
        assert_eq!(employee.kind(), EmployeeKind::Manager);
        assert!(employee.as_manager().is_some());
    }
}
