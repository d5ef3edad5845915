//! In-memory employee repository.

use std::sync::{Arc, RwLock};

use tracing::debug;

use payroll_core::{
    application::{ApplicationError, ports::EmployeeRepository},
    domain::{Employee, EmployeeId},
    error::PayrollResult,
};

use super::RecordTable;

/// Thread-safe in-memory employee repository.
///
/// Clones share the same underlying table.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<RecordTable>>,
}

impl InMemoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RecordTable::new())),
        }
    }

    /// Create a repository pre-populated with `records`.
    ///
    /// Records are stored as given, without validation. Fails when two
    /// records share an id.
    pub fn with_records(records: impl IntoIterator<Item = Employee>) -> PayrollResult<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(RecordTable::from_records(records)?)),
        })
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Check if repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all records. The id sequence is not reset.
    pub fn clear(&self) -> PayrollResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for InMemoryRepository {
    fn save(&self, employee: Employee) -> PayrollResult<Employee> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let saved = inner.upsert(employee)?;
        debug!(id = ?saved.id(), "Stored employee in memory");
        Ok(saved)
    }

    fn find(&self, id: EmployeeId) -> PayrollResult<Option<Employee>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(id).cloned())
    }

    fn list(&self) -> PayrollResult<Vec<Employee>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn remove(&self, id: EmployeeId) -> PayrollResult<Option<Employee>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.remove(id))
    }
}
