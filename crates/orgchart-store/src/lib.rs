//! Orgchart Store - keyed storage for designation and employee records
//!
//! The narrow seam the hierarchy engine consumes:
//! - `HierarchyStore`: lookups by id, title, rank and manager reference,
//!   plus upsert/delete writes
//! - `MemoryStore`: insertion-ordered in-memory reference implementation
//!   used by tests and single-process embeddings
//!
//! The engine never caches resolved records across commands; every lookup
//! goes back through the trait, so a durable backend swapped in behind it
//! behaves identically.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::HierarchyStore;

use thiserror::Error;

/// Errors originating from the storage layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with id {0}")]
    RecordNotFound(String),

    #[error("A designation titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
