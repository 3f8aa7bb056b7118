use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignationId(Uuid);

impl DesignationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DesignationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A job level on the totally ordered seniority scale.
///
/// Title and rank are immutable once assigned; a designation is deleted
/// only when no employee references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    pub id: DesignationId,
    /// Globally unique, 2-30 letters and spaces.
    pub title: String,
    /// Seniority value; a smaller rank is more senior.
    pub rank: f64,
    pub created_at: DateTime<Utc>,
}

impl Designation {
    pub fn new(title: impl Into<String>, rank: f64) -> Self {
        Self {
            id: DesignationId::generate(),
            title: title.into(),
            rank,
            created_at: Utc::now(),
        }
    }

    /// Whether this designation is strictly more senior than `other`.
    pub fn outranks(&self, other: &Designation) -> bool {
        self.rank < other.rank
    }
}

/// A member of the management tree.
///
/// Only the holder of the root designation may have no manager. The
/// subordinate set is never stored; it is always derived by querying for
/// employees whose manager reference equals this employee's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// 2-30 letters and spaces.
    pub name: String,
    pub designation: DesignationId,
    pub manager: Option<EmployeeId>,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        designation: DesignationId,
        manager: Option<EmployeeId>,
    ) -> Self {
        Self {
            id: EmployeeId::generate(),
            name: name.into(),
            designation,
            manager,
            created_at: Utc::now(),
        }
    }
}
