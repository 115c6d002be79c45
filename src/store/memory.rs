//! In-memory employee store with optional JSON snapshots.
//!
//! [`MemoryStore`] is both the manager lookup and the persistence sink of a
//! run. Employees are keyed by identifier, so saving a record whose
//! identifier is already stored replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ImportError, ImportResult};
use crate::models::{Employee, EmployeeId, Manager};

use super::traits::{EmployeeSink, ManagerLookup};

/// Employees persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON snapshot.
    ///
    /// A missing file yields an empty store, so the first run can point at a
    /// snapshot path that does not exist yet.
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No snapshot found, starting empty");
            return Ok(Self::new());
        }

        let persistence_error = |message: String| ImportError::Persistence {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| persistence_error(e.to_string()))?;
        let employees: Vec<Employee> =
            serde_json::from_str(&content).map_err(|e| persistence_error(e.to_string()))?;

        let mut store = Self::new();
        store.insert_all(employees);
        info!(path = %path.display(), employees = store.len(), "Loaded employee snapshot");
        Ok(store)
    }

    /// Writes every stored employee to a JSON snapshot.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImportResult<()> {
        let path = path.as_ref();
        let persistence_error = |message: String| ImportError::Persistence {
            path: path.display().to_string(),
            message,
        };

        let employees: Vec<&Employee> = self.employees.values().collect();
        let json = serde_json::to_string_pretty(&employees)
            .map_err(|e| persistence_error(e.to_string()))?;
        fs::write(path, json).map_err(|e| persistence_error(e.to_string()))?;

        info!(path = %path.display(), employees = self.len(), "Saved employee snapshot");
        Ok(())
    }

    /// Returns the employee with this identifier.
    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Iterates over stored employees in identifier order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn insert_all(&mut self, employees: Vec<Employee>) -> usize {
        let count = employees.len();
        for employee in employees {
            self.employees.insert(employee.id().clone(), employee);
        }
        count
    }
}

impl ManagerLookup for MemoryStore {
    fn find_manager(&self, id: &EmployeeId) -> Option<Manager> {
        self.employees
            .get(id)
            .and_then(Employee::as_manager)
            .cloned()
    }
}

impl EmployeeSink for MemoryStore {
    fn save_all(&mut self, employees: Vec<Employee>) -> ImportResult<usize> {
        Ok(self.insert_all(employees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{build_manager, build_sales_rep, split_fields};

    fn manager(line: &str) -> Employee {
        build_manager(&split_fields(line)).unwrap().into()
    }

    #[test]
    fn test_find_manager_only_returns_managers() {
        let mut store = MemoryStore::new();
        let sales_rep: Employee = build_sales_rep(&split_fields("C00003,Fox,Amy,01/01/2020,2500,100000,5"))
            .unwrap()
            .into();
        store
            .save_all(vec![manager("M00001,Doe,Jane,01/01/2020,3000"), sales_rep])
            .unwrap();

        assert!(store.find_manager(&"M00001".parse().unwrap()).is_some());
        assert!(store.find_manager(&"C00003".parse().unwrap()).is_none());
        assert!(store.find_manager(&"M00002".parse().unwrap()).is_none());
    }

    #[test]
    fn test_save_all_replaces_same_identifier() {
        let mut store = MemoryStore::new();
        store
            .save_all(vec![manager("M00001,Doe,Jane,01/01/2020,3000")])
            .unwrap();
        store
            .save_all(vec![manager("M00001,Doe,Janet,01/01/2020,3500")])
            .unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.get(&"M00001".parse().unwrap()).unwrap();
        assert_eq!(stored.info().first_name, "Janet");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");

        let mut store = MemoryStore::new();
        store
            .save_all(vec![manager("M00001,Doe,Jane,01/01/2020,3000")])
            .unwrap();
        store.save(&path).unwrap();

        let loaded = MemoryStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.employees().next(),
            store.employees().next()
        );
    }

    #[test]
    fn test_load_missing_snapshot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::load(dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            MemoryStore::load(&path),
            Err(ImportError::Persistence { .. })
        ));
    }
}
