//! Command orchestration for designation and employee mutations.
//!
//! Every command follows the same sequence: validate input, check the
//! tree invariants through a fresh [`HierarchyGraph`] view, then write.
//! All reads and validations happen before the first write, so a
//! rejected command leaves the store untouched. Taking `&mut self` on
//! every mutation serializes commands: one runs to completion before any
//! other can observe its effects.
//!
//! The two multi-record sequences (replace, delete) restore the already
//! re-parented subordinates if a later write fails, so no employee is
//! ever left pointing at a retired manager.

use orgchart_model::{validate_name, Designation, DesignationId, Employee, EmployeeId};
use orgchart_store::HierarchyStore;
use serde::{Deserialize, Serialize};

use crate::graph::HierarchyGraph;
use crate::rank::RankAllocator;
use crate::HierarchyError;

/// Partial update for an employee. At least one field must be present.
///
/// A manager can be assigned but not cleared here: only the root holder
/// may be parentless, and the root seat is never assigned by update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub designation_title: Option<String>,
    pub manager: Option<EmployeeId>,
}

impl EmployeeUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.designation_title.is_none() && self.manager.is_none()
    }
}

/// Orchestrates the mutation commands against a store.
pub struct MutationProtocol<S: HierarchyStore> {
    store: S,
    ranks: RankAllocator,
}

impl<S: HierarchyStore> MutationProtocol<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ranks: RankAllocator::new(),
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the protocol and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn graph(&self) -> HierarchyGraph<'_> {
        HierarchyGraph::new(&self.store)
    }

    // ── Designation commands ──

    /// Create a designation positioned directly below `anchor`, or tied
    /// at the anchor's rank when `tie_with_anchor`.
    ///
    /// The first designation ever created needs no anchor and becomes
    /// the root of the scale.
    pub fn create_designation(
        &mut self,
        title: &str,
        anchor: Option<DesignationId>,
        tie_with_anchor: bool,
    ) -> Result<Designation, HierarchyError> {
        validate_name("title", title)?;

        if self.store.designation_by_title(title)?.is_some() {
            return Err(HierarchyError::DuplicateTitle(title.to_string()));
        }

        let rank = self.ranks.allocate(&self.store, anchor, tie_with_anchor)?;
        let designation = Designation::new(title, rank);
        self.store.save_designation(&designation)?;

        tracing::info!(
            title = %designation.title,
            rank = designation.rank,
            "Designation created"
        );
        Ok(designation)
    }

    /// Delete a designation no employee references.
    pub fn delete_designation(&mut self, id: DesignationId) -> Result<Designation, HierarchyError> {
        let designation = self
            .store
            .designation_by_id(id)?
            .ok_or_else(|| HierarchyError::DesignationNotFound(id.to_string()))?;

        if !self.store.employees_by_designation(id)?.is_empty() {
            return Err(HierarchyError::DesignationInUse(designation.title.clone()));
        }

        self.store.delete_designation(id)?;
        tracing::info!(title = %designation.title, "Designation deleted");
        Ok(designation)
    }

    // ── Employee commands ──

    /// Create an employee holding the designation titled
    /// `designation_title`, reporting to `manager`.
    ///
    /// Only the (currently vacant) root designation may be taken without
    /// a manager; everyone else reports to someone who outranks them.
    pub fn create_employee(
        &mut self,
        name: &str,
        designation_title: &str,
        manager: Option<EmployeeId>,
    ) -> Result<Employee, HierarchyError> {
        validate_name("name", name)?;
        let designation = self.resolve_designation(designation_title)?;

        let root_id = self.graph().root_designation()?.map(|r| r.id);
        if root_id == Some(designation.id) {
            if !self.store.employees_by_designation(designation.id)?.is_empty() {
                return Err(HierarchyError::MultipleRoots);
            }
            if manager.is_some() {
                return Err(HierarchyError::RootCannotHaveManager);
            }
        } else if manager.is_none() {
            return Err(HierarchyError::ManagerRequired);
        }

        if let Some(manager_id) = manager {
            self.graph()
                .validate_manager_assignment(manager_id, &designation)?;
        }

        let employee = Employee::new(name, designation.id, manager);
        self.store.save_employee(&employee)?;

        tracing::info!(
            name = %employee.name,
            designation = %designation.title,
            "Employee created"
        );
        Ok(employee)
    }

    /// Apply a partial update in place. The identity is preserved.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, HierarchyError> {
        if update.is_empty() {
            return Err(HierarchyError::EmptyUpdate);
        }

        let mut employee = self
            .store
            .employee_by_id(id)?
            .ok_or(HierarchyError::EmployeeNotFound(id))?;

        if let Some(name) = &update.name {
            validate_name("name", name)?;
            employee.name = name.clone();
        }

        if let Some(title) = &update.designation_title {
            let designation = self.resolve_designation(title)?;
            let root_id = self.graph().root_designation()?.map(|r| r.id);

            if root_id == Some(employee.designation) {
                // The root holder keeps their seat: only the no-op is allowed.
                if update.manager.is_some() {
                    return Err(HierarchyError::RootCannotHaveManager);
                }
                if designation.id != employee.designation {
                    return Err(HierarchyError::RootDesignationImmutable);
                }
            } else if root_id == Some(designation.id) {
                // The root seat only changes hands through create or replace.
                return Err(HierarchyError::RootDesignationImmutable);
            } else {
                self.graph().validate_against_subordinates(id, &designation)?;
                // A promotion must not climb past the current manager,
                // unless this same command reassigns the manager too.
                if update.manager.is_none() {
                    if let Some(manager_id) = employee.manager {
                        self.graph().validate_manager_assignment(manager_id, &designation)?;
                    }
                }
                employee.designation = designation.id;
            }
        }

        if let Some(manager_id) = update.manager {
            let held = self
                .store
                .designation_by_id(employee.designation)?
                .ok_or_else(|| {
                    HierarchyError::DesignationNotFound(employee.designation.to_string())
                })?;
            self.graph().validate_manager_assignment(manager_id, &held)?;
            employee.manager = Some(manager_id);
        }

        self.store.save_employee(&employee)?;
        tracing::info!(employee = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Replace an employee with a fresh identity holding the given name,
    /// designation and manager; the old identity's subordinates move to
    /// the replacement.
    ///
    /// When `manager` is absent it defaults to the target's current
    /// manager. The new record, the re-parented subordinates and the
    /// removal of the old record commit as one logical unit.
    pub fn replace_employee(
        &mut self,
        id: EmployeeId,
        name: &str,
        designation_title: &str,
        manager: Option<EmployeeId>,
    ) -> Result<Employee, HierarchyError> {
        let old = self
            .store
            .employee_by_id(id)?
            .ok_or(HierarchyError::EmployeeNotFound(id))?;

        validate_name("name", name)?;
        let designation = self.resolve_designation(designation_title)?;
        let manager = manager.or(old.manager);

        let root_id = self.graph().root_designation()?.map(|r| r.id);
        if root_id == Some(designation.id) {
            if manager.is_some() {
                return Err(HierarchyError::RootCannotHaveManager);
            }
            // The seat may be handed over, but never duplicated: only the
            // employee being replaced is allowed to hold it already.
            let seated = self.store.employees_by_designation(designation.id)?;
            if seated.iter().any(|e| e.id != id) {
                return Err(HierarchyError::MultipleRoots);
            }
        } else if manager.is_none() {
            return Err(HierarchyError::ManagerRequired);
        }

        if let Some(manager_id) = manager {
            // The outgoing identity is retired in the same unit, so it
            // cannot manage its own replacement.
            if manager_id == id {
                return Err(HierarchyError::ManagerNotFound(manager_id));
            }
            self.graph()
                .validate_manager_assignment(manager_id, &designation)?;
        }

        // The replacement inherits the subordinate set, so the new
        // designation must outrank all of it up front.
        self.graph().validate_against_subordinates(id, &designation)?;

        let replacement = Employee::new(name, designation.id, manager);
        let moved = self.graph().reparent_children(id, Some(replacement.id))?;

        self.store.save_employee(&replacement)?;
        for (done, record) in moved.iter().enumerate() {
            if let Err(err) = self.store.save_employee(record) {
                self.restore_subordinates(&moved[..done], old.id);
                self.discard_record(replacement.id);
                return Err(err.into());
            }
        }
        if let Err(err) = self.store.delete_employee(id) {
            self.restore_subordinates(&moved, old.id);
            self.discard_record(replacement.id);
            return Err(err.into());
        }

        tracing::info!(
            old = %old.id,
            new = %replacement.id,
            reparented = moved.len(),
            "Employee replaced"
        );
        Ok(replacement)
    }

    /// Delete an employee; their subordinates roll up to the departing
    /// employee's own manager.
    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<Employee, HierarchyError> {
        let employee = self
            .store
            .employee_by_id(id)?
            .ok_or(HierarchyError::EmployeeNotFound(id))?;

        let root_id = self.graph().root_designation()?.map(|r| r.id);
        let moved = self.graph().reparent_children(id, employee.manager)?;

        if root_id == Some(employee.designation) && !moved.is_empty() {
            return Err(HierarchyError::RootHasSubordinates);
        }

        for (done, record) in moved.iter().enumerate() {
            if let Err(err) = self.store.save_employee(record) {
                self.restore_subordinates(&moved[..done], id);
                return Err(err.into());
            }
        }
        if let Err(err) = self.store.delete_employee(id) {
            self.restore_subordinates(&moved, id);
            return Err(err.into());
        }

        tracing::info!(
            name = %employee.name,
            reparented = moved.len(),
            "Employee deleted"
        );
        Ok(employee)
    }

    // ── Queries ──

    /// All designations, most senior first.
    pub fn designations(&self) -> Result<Vec<Designation>, HierarchyError> {
        Ok(self.store.designations_by_rank_ascending()?)
    }

    pub fn designation_by_title(&self, title: &str) -> Result<Option<Designation>, HierarchyError> {
        Ok(self.store.designation_by_title(title)?)
    }

    pub fn employees(&self) -> Result<Vec<Employee>, HierarchyError> {
        Ok(self.store.employees()?)
    }

    pub fn employee(&self, id: EmployeeId) -> Result<Option<Employee>, HierarchyError> {
        Ok(self.store.employee_by_id(id)?)
    }

    pub fn root_designation(&self) -> Result<Option<Designation>, HierarchyError> {
        self.graph().root_designation()
    }

    pub fn subordinates_of(&self, id: EmployeeId) -> Result<Vec<Employee>, HierarchyError> {
        self.graph().subordinates_of(id)
    }

    // ── Internals ──

    fn resolve_designation(&self, title: &str) -> Result<Designation, HierarchyError> {
        self.store
            .designation_by_title(title)?
            .ok_or_else(|| HierarchyError::DesignationNotFound(title.to_string()))
    }

    /// Best-effort restore of re-parented subordinates after a failed
    /// multi-record write.
    fn restore_subordinates(&mut self, moved: &[Employee], manager: EmployeeId) {
        tracing::warn!(%manager, count = moved.len(), "Restoring subordinates after partial failure");
        for employee in moved {
            let mut restored = employee.clone();
            restored.manager = Some(manager);
            if let Err(err) = self.store.save_employee(&restored) {
                tracing::warn!(
                    subordinate = %restored.id,
                    error = %err,
                    "Could not restore subordinate during rollback"
                );
            }
        }
    }

    fn discard_record(&mut self, id: EmployeeId) {
        if let Err(err) = self.store.delete_employee(id) {
            tracing::warn!(
                employee = %id,
                error = %err,
                "Could not remove half-committed replacement"
            );
        }
    }
}
