//! The storage contract consumed by the hierarchy engine.

use orgchart_model::{Designation, DesignationId, Employee, EmployeeId};

use crate::StoreError;

/// Keyed storage for designation and employee records.
///
/// Implementations must behave as a consistent snapshot within a single
/// command: the engine performs all reads and validations before its
/// first write and expects writes to be visible to subsequent reads.
/// Records are exchanged by value; nothing hands out references into the
/// backing storage.
pub trait HierarchyStore {
    // ── Designations ──

    /// Look up a designation by id.
    fn designation_by_id(&self, id: DesignationId) -> Result<Option<Designation>, StoreError>;

    /// Look up a designation by its unique title.
    fn designation_by_title(&self, title: &str) -> Result<Option<Designation>, StoreError>;

    /// All designations in insertion order.
    fn designations(&self) -> Result<Vec<Designation>, StoreError>;

    /// All designations holding exactly the given rank.
    fn designations_by_rank(&self, rank: f64) -> Result<Vec<Designation>, StoreError>;

    /// All designations ordered by ascending rank, most senior first.
    /// Ties keep insertion order.
    fn designations_by_rank_ascending(&self) -> Result<Vec<Designation>, StoreError>;

    /// Insert or overwrite a designation record by id.
    ///
    /// Fails with [`StoreError::DuplicateTitle`] when a different record
    /// already holds the same title.
    fn save_designation(&mut self, designation: &Designation) -> Result<(), StoreError>;

    /// Delete a designation record. Fails with
    /// [`StoreError::RecordNotFound`] when the id is absent.
    fn delete_designation(&mut self, id: DesignationId) -> Result<(), StoreError>;

    // ── Employees ──

    /// Look up an employee by id.
    fn employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError>;

    /// All employees in insertion order.
    fn employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// All employees currently assigned the given designation.
    fn employees_by_designation(
        &self,
        designation: DesignationId,
    ) -> Result<Vec<Employee>, StoreError>;

    /// Insert or overwrite an employee record by id.
    fn save_employee(&mut self, employee: &Employee) -> Result<(), StoreError>;

    /// Delete an employee record. Fails with
    /// [`StoreError::RecordNotFound`] when the id is absent.
    fn delete_employee(&mut self, id: EmployeeId) -> Result<(), StoreError>;
}
