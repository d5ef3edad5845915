//! Employee repository adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

use std::collections::BTreeMap;

use payroll_core::{
    application::ApplicationError,
    domain::{Employee, EmployeeId},
};

/// Id-keyed record table with a monotonic id sequence.
///
/// Shared by every adapter so id assignment behaves the same regardless of
/// where records end up.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordTable {
    records: BTreeMap<EmployeeId, Employee>,
    next_id: u64,
}

impl RecordTable {
    pub(crate) fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuild a table from stored records.
    ///
    /// Records carrying an id keep it; two records sharing an id are refused.
    /// Records without one are numbered after the highest stored id.
    pub(crate) fn from_records(
        records: impl IntoIterator<Item = Employee>,
    ) -> Result<Self, ApplicationError> {
        let mut table = Self::new();
        let mut unassigned = Vec::new();

        for employee in records {
            let Some(id) = employee.id() else {
                unassigned.push(employee);
                continue;
            };
            if table.records.contains_key(&id) {
                return Err(ApplicationError::Persistence {
                    reason: format!("duplicate employee id {id}"),
                });
            }
            table.upsert(employee)?;
        }

        for employee in unassigned {
            table.upsert(employee)?;
        }
        Ok(table)
    }

    /// Insert or replace, assigning the next id when the record has none.
    ///
    /// Fails without touching the table when the id leaves no successor.
    pub(crate) fn upsert(&mut self, mut employee: Employee) -> Result<Employee, ApplicationError> {
        let id = employee.id().unwrap_or(EmployeeId::new(self.next_id));
        let successor = id
            .get()
            .checked_add(1)
            .ok_or_else(|| ApplicationError::Persistence {
                reason: format!("employee id {id} exhausts the id sequence"),
            })?;

        employee.set_id(id);
        self.next_id = self.next_id.max(successor);
        self.records.insert(id, employee.clone());
        Ok(employee)
    }

    pub(crate) fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.get(&id)
    }

    pub(crate) fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        self.records.remove(&id)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Employee> {
        self.records.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut table = RecordTable::new();
        let a = table.upsert(Employee::empty()).unwrap();
        let b = table.upsert(Employee::empty()).unwrap();
        assert_eq!(a.id(), Some(EmployeeId::new(1)));
        assert_eq!(b.id(), Some(EmployeeId::new(2)));
    }

    #[test]
    fn explicit_ids_advance_the_sequence() {
        let mut table = RecordTable::new();
        table
            .upsert(Employee::empty().with_id(EmployeeId::new(10)))
            .unwrap();
        let next = table.upsert(Employee::empty()).unwrap();
        assert_eq!(next.id(), Some(EmployeeId::new(11)));
    }

    #[test]
    fn upsert_replaces_existing() {
        let mut table = RecordTable::new();
        let stored = table.upsert(Employee::empty()).unwrap();
        let mut changed = stored.clone();
        changed.set_job_years(3).unwrap();
        table.upsert(changed.clone()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(EmployeeId::new(1)), Some(&changed));
    }

    #[test]
    fn from_records_keeps_ids_and_fills_gaps() {
        let table = RecordTable::from_records(vec![
            Employee::empty().with_id(EmployeeId::new(5)),
            Employee::empty(),
        ])
        .unwrap();
        let ids: Vec<_> = table.values().filter_map(Employee::id).collect();
        assert_eq!(ids, vec![EmployeeId::new(5), EmployeeId::new(6)]);
    }

    #[test]
    fn unassigned_records_never_take_a_later_explicit_id() {
        let table = RecordTable::from_records(vec![
            Employee::empty(),
            Employee::empty().with_id(EmployeeId::new(1)),
        ])
        .unwrap();
        let ids: Vec<_> = table.values().filter_map(Employee::id).collect();
        assert_eq!(ids, vec![EmployeeId::new(1), EmployeeId::new(2)]);
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let mut frodo = Employee::empty().with_id(EmployeeId::new(1));
        frodo.set_first_name("Frodo").unwrap();
        let mut sam = Employee::empty().with_id(EmployeeId::new(1));
        sam.set_first_name("Sam").unwrap();

        let err = RecordTable::from_records(vec![frodo, sam]).unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Persistence {
                reason: "duplicate employee id 1".into()
            }
        );
    }

    #[test]
    fn largest_id_is_refused_instead_of_wrapping() {
        let last = Employee::empty().with_id(EmployeeId::new(u64::MAX));
        assert!(matches!(
            RecordTable::from_records(vec![last]),
            Err(ApplicationError::Persistence { .. })
        ));

        let mut table = RecordTable::from_records(vec![
            Employee::empty().with_id(EmployeeId::new(u64::MAX - 1)),
        ])
        .unwrap();
        let err = table.upsert(Employee::empty()).unwrap_err();
        assert!(matches!(err, ApplicationError::Persistence { .. }));
        assert_eq!(table.len(), 1);
    }
}
