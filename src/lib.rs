//! Employee Import Engine
//!
//! This crate turns a comma-delimited employee file (managers, technicians
//! and sales representatives) into validated, typed records. Each line is
//! classified by its leading character, checked field by field, and either
//! built into a record or rejected with a line-scoped diagnostic; a rejected
//! line never stops the batch.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod builders;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod validation;
