//! In-memory reference implementation of the storage contract.

use orgchart_model::{Designation, DesignationId, Employee, EmployeeId};

use crate::store::HierarchyStore;
use crate::StoreError;

/// Insertion-ordered in-memory store.
///
/// Lookups are linear scans; trees stay small and the engine favors
/// correctness over asymptotic efficiency.
#[derive(Debug, Default)]
pub struct MemoryStore {
    designations: Vec<Designation>,
    employees: Vec<Employee>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of designation records.
    pub fn designation_count(&self) -> usize {
        self.designations.len()
    }

    /// Total number of employee records.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}

impl HierarchyStore for MemoryStore {
    fn designation_by_id(&self, id: DesignationId) -> Result<Option<Designation>, StoreError> {
        Ok(self.designations.iter().find(|d| d.id == id).cloned())
    }

    fn designation_by_title(&self, title: &str) -> Result<Option<Designation>, StoreError> {
        Ok(self.designations.iter().find(|d| d.title == title).cloned())
    }

    fn designations(&self) -> Result<Vec<Designation>, StoreError> {
        Ok(self.designations.clone())
    }

    fn designations_by_rank(&self, rank: f64) -> Result<Vec<Designation>, StoreError> {
        Ok(self
            .designations
            .iter()
            .filter(|d| d.rank == rank)
            .cloned()
            .collect())
    }

    fn designations_by_rank_ascending(&self) -> Result<Vec<Designation>, StoreError> {
        let mut ordered = self.designations.clone();
        // Stable sort keeps insertion order among tied ranks.
        ordered.sort_by(|a, b| a.rank.total_cmp(&b.rank));
        Ok(ordered)
    }

    fn save_designation(&mut self, designation: &Designation) -> Result<(), StoreError> {
        if self
            .designations
            .iter()
            .any(|d| d.title == designation.title && d.id != designation.id)
        {
            return Err(StoreError::DuplicateTitle(designation.title.clone()));
        }

        match self.designations.iter_mut().find(|d| d.id == designation.id) {
            Some(existing) => *existing = designation.clone(),
            None => self.designations.push(designation.clone()),
        }
        Ok(())
    }

    fn delete_designation(&mut self, id: DesignationId) -> Result<(), StoreError> {
        let before = self.designations.len();
        self.designations.retain(|d| d.id != id);
        if self.designations.len() == before {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        tracing::debug!(designation = %id, "Designation record removed");
        Ok(())
    }

    fn employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    fn employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.employees.clone())
    }

    fn employees_by_designation(
        &self,
        designation: DesignationId,
    ) -> Result<Vec<Employee>, StoreError> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.designation == designation)
            .cloned()
            .collect())
    }

    fn save_employee(&mut self, employee: &Employee) -> Result<(), StoreError> {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => self.employees.push(employee.clone()),
        }
        Ok(())
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Result<(), StoreError> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() == before {
            return Err(StoreError::RecordNotFound(id.to_string()));
        }
        tracing::debug!(employee = %id, "Employee record removed");
        Ok(())
    }
}
