//! Orgchart Hierarchy - rank allocation and management-tree integrity
//!
//! Implements the org-chart engine:
//! - Fractional rank allocation for new designations (`RankAllocator`)
//! - Tree-invariant queries and validation (`HierarchyGraph`)
//! - Create/update/replace/delete command orchestration
//!   (`MutationProtocol`)
//! - Idempotent bootstrap seeding for empty stores
//!
//! Two invariants hold after every command: every employee's manager
//! strictly outranks them, and at most one employee holds the root
//! designation (the globally minimum rank).

pub mod graph;
pub mod protocol;
pub mod rank;
pub mod seed;

pub use graph::HierarchyGraph;
pub use protocol::{EmployeeUpdate, MutationProtocol};
pub use rank::RankAllocator;

use orgchart_model::{DesignationId, EmployeeId, ValidationError};
use orgchart_store::StoreError;
use thiserror::Error;

/// Broad classification of a command rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; recoverable by correcting it.
    Validation,
    /// A referenced id or title did not resolve.
    NotFound,
    /// The command would violate a hierarchy invariant or uniqueness rule.
    Conflict,
}

/// Errors originating from the hierarchy engine.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Designation not found: {0}")]
    DesignationNotFound(String),

    #[error("Anchor designation not found: {0}")]
    InvalidAnchor(DesignationId),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Manager not found: {0}")]
    ManagerNotFound(EmployeeId),

    #[error("A designation titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Designation '{manager}' does not outrank '{subordinate}'")]
    ManagerTooJunior {
        manager: String,
        subordinate: String,
    },

    #[error("Designation '{0}' does not outrank every current subordinate")]
    SubordinateConflict(String),

    #[error("An employee already holds the root designation")]
    MultipleRoots,

    #[error("The root designation holder cannot have a manager")]
    RootCannotHaveManager,

    #[error("The root designation cannot be assigned or removed by update")]
    RootDesignationImmutable,

    #[error("The root employee still has subordinates")]
    RootHasSubordinates,

    #[error("A manager is required for every non-root employee")]
    ManagerRequired,

    #[error("An anchor designation is required once designations exist")]
    AnchorRequired,

    #[error("Update contains no fields to apply")]
    EmptyUpdate,

    #[error("Employees are still assigned to designation '{0}'")]
    DesignationInUse(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl HierarchyError {
    /// Classify into the stable three-way taxonomy callers map onto
    /// their own response surface.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HierarchyError::Validation(_) => ErrorKind::Validation,
            HierarchyError::DesignationNotFound(_)
            | HierarchyError::InvalidAnchor(_)
            | HierarchyError::EmployeeNotFound(_)
            | HierarchyError::ManagerNotFound(_) => ErrorKind::NotFound,
            HierarchyError::DuplicateTitle(_)
            | HierarchyError::ManagerTooJunior { .. }
            | HierarchyError::SubordinateConflict(_)
            | HierarchyError::MultipleRoots
            | HierarchyError::RootCannotHaveManager
            | HierarchyError::RootDesignationImmutable
            | HierarchyError::RootHasSubordinates
            | HierarchyError::ManagerRequired
            | HierarchyError::AnchorRequired
            | HierarchyError::EmptyUpdate
            | HierarchyError::DesignationInUse(_)
            | HierarchyError::Store(_) => ErrorKind::Conflict,
        }
    }
}
