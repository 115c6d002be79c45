//! Core data models for the employee import engine.
//!
//! This module contains the identifier type, the three employee variants
//! and the closed [`Employee`] type that wraps them.

mod employee;
mod identifier;
mod technician;

pub use employee::{Employee, EmployeeInfo, Manager, SalesRep};
pub use identifier::{EmployeeId, EmployeeKind};
pub use technician::{
    GRADE_MAX, GRADE_MIN, Grade, ManagerRef, ManagerSource, Technician, TechnicianError,
};
