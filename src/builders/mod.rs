//! Record builders for the employee import engine.
//!
//! One builder per employee variant. Each takes a line already split into
//! fields, checks the field count, validates its variant-specific fields and
//! then the common ones, stopping at the first failure.

mod common;
mod manager;
mod sales_rep;
mod technician;

pub use common::{build_common_fields, check_arity, split_fields};
pub use manager::build_manager;
pub use sales_rep::build_sales_rep;
pub use technician::build_technician;
