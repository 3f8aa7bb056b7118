//! Tree-invariant queries and validation over the stored records.
//!
//! A `HierarchyGraph` is a short-lived view constructed per command. It
//! holds no state of its own: the root designation and every subordinate
//! set are derived from current storage on each call, so the view can
//! never diverge from what is persisted.

use orgchart_model::{Designation, Employee, EmployeeId};
use orgchart_store::HierarchyStore;

use crate::HierarchyError;

/// Read-only view of the management tree derived from the store.
pub struct HierarchyGraph<'a> {
    store: &'a dyn HierarchyStore,
}

impl<'a> HierarchyGraph<'a> {
    pub fn new(store: &'a dyn HierarchyStore) -> Self {
        Self { store }
    }

    /// The unique designation holding the globally minimum rank.
    ///
    /// Returns `None` when no designations exist or several tie for the
    /// minimum; an ambiguous root is "no usable root", not an error, so
    /// the query stays total.
    pub fn root_designation(&self) -> Result<Option<Designation>, HierarchyError> {
        let ordered = self.store.designations_by_rank_ascending()?;
        let Some(first) = ordered.first() else {
            return Ok(None);
        };

        let ties = self.store.designations_by_rank(first.rank)?;
        if ties.len() == 1 {
            Ok(Some(first.clone()))
        } else {
            Ok(None)
        }
    }

    /// The employee currently seated on the root designation, if any.
    pub fn root_employee(&self) -> Result<Option<Employee>, HierarchyError> {
        let Some(root) = self.root_designation()? else {
            return Ok(None);
        };
        let seated = self.store.employees_by_designation(root.id)?;
        Ok(seated.into_iter().next())
    }

    /// Employees whose manager reference equals `id`.
    pub fn subordinates_of(&self, id: EmployeeId) -> Result<Vec<Employee>, HierarchyError> {
        let subordinates = self
            .store
            .employees()?
            .into_iter()
            .filter(|e| e.manager == Some(id))
            .collect();
        Ok(subordinates)
    }

    /// Resolve a candidate manager and check they strictly outrank
    /// `designation`. Returns the resolved manager on success.
    pub fn validate_manager_assignment(
        &self,
        manager_id: EmployeeId,
        designation: &Designation,
    ) -> Result<Employee, HierarchyError> {
        let manager = self
            .store
            .employee_by_id(manager_id)?
            .ok_or(HierarchyError::ManagerNotFound(manager_id))?;

        let held = self.designation_of(&manager)?;
        if !held.outranks(designation) {
            return Err(HierarchyError::ManagerTooJunior {
                manager: held.title,
                subordinate: designation.title.clone(),
            });
        }

        Ok(manager)
    }

    /// Check that `new_designation` strictly outranks the designation of
    /// every current subordinate of `id`. A manager may never become
    /// junior to, or a peer of, someone who reports to them.
    pub fn validate_against_subordinates(
        &self,
        id: EmployeeId,
        new_designation: &Designation,
    ) -> Result<(), HierarchyError> {
        for subordinate in self.subordinates_of(id)? {
            let held = self.designation_of(&subordinate)?;
            if !new_designation.outranks(&held) {
                return Err(HierarchyError::SubordinateConflict(
                    new_designation.title.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Compute the re-parented records for every subordinate of
    /// `old_employee`: each record returned carries its manager
    /// reference swapped to `new_manager`. The caller persists them,
    /// which keeps this view strictly read-only.
    pub fn reparent_children(
        &self,
        old_employee: EmployeeId,
        new_manager: Option<EmployeeId>,
    ) -> Result<Vec<Employee>, HierarchyError> {
        let mut moved = self.subordinates_of(old_employee)?;
        for employee in &mut moved {
            employee.manager = new_manager;
        }
        Ok(moved)
    }

    fn designation_of(&self, employee: &Employee) -> Result<Designation, HierarchyError> {
        self.store
            .designation_by_id(employee.designation)?
            .ok_or_else(|| HierarchyError::DesignationNotFound(employee.designation.to_string()))
    }
}
