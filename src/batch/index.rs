//! Index of managers built earlier in the current batch.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ImportError, ImportResult};
use crate::models::{EmployeeId, Manager, ManagerRef, ManagerSource};
use crate::store::ManagerLookup;

/// Managers built so far in a run, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ManagerIndex {
    managers: HashMap<EmployeeId, Manager>,
}

impl ManagerIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a manager. A later line with the same identifier replaces it.
    pub fn insert(&mut self, manager: Manager) {
        self.managers.insert(manager.info.id.clone(), manager);
    }

    /// Returns true if a manager with this identifier was built in the batch.
    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.managers.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.managers.len()
    }

    /// Resolves a manager reference.
    ///
    /// The batch is searched first; `lookup` is only consulted on a miss.
    pub fn resolve(&self, id: EmployeeId, lookup: &dyn ManagerLookup) -> ImportResult<ManagerRef> {
        if self.contains(&id) {
            debug!(manager_id = %id, "Manager resolved from current batch");
            return Ok(ManagerRef {
                id,
                source: ManagerSource::Batch,
            });
        }

        match lookup.find_manager(&id) {
            Some(_) => {
                debug!(manager_id = %id, "Manager resolved from store");
                Ok(ManagerRef {
                    id,
                    source: ManagerSource::Store,
                })
            }
            None => Err(ImportError::ManagerNotFound { id: id.to_string() }),
        }
    }
}
