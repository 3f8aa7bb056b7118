//! Orgchart Model - shared record types and field validation
//!
//! The vocabulary every other layer speaks:
//! - `DesignationId` / `EmployeeId` uuid-backed identifiers
//! - `Designation` (a ranked job level) and `Employee` records
//! - Name/title validation rules shared by every mutation path
//! - Constants: the root rank sentinel and field length bounds

pub mod constants;
pub mod error;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use types::{Designation, DesignationId, Employee, EmployeeId};
pub use validate::validate_name;
