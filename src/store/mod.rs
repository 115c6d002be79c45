//! Collaborators at the edges of a batch run.
//!
//! The traits describe what the orchestrator needs from the outside world;
//! the concrete types cover files, in-memory text and a JSON-backed store.

mod memory;
mod source;
mod traits;

pub use memory::MemoryStore;
pub use source::{FileSource, TextSource};
pub use traits::{EmployeeSink, LineSource, ManagerLookup};
