//! Bootstrap seeding for empty stores.
//!
//! The surrounding application calls these on startup: a default
//! designation ladder with fixed seed ranks (bulk bootstrap, the one
//! path that bypasses the allocator) and a small demonstration roster
//! created through the regular commands so the seed data passes the
//! same invariant checks as everything else.
//!
//! Both helpers are idempotent: a non-empty store is left untouched.

use orgchart_model::Designation;
use orgchart_store::HierarchyStore;

use crate::protocol::MutationProtocol;
use crate::HierarchyError;

/// The default ladder: title and fixed seed rank.
const DEFAULT_LADDER: [(&str, f64); 7] = [
    ("Director", 1.0),
    ("Manager", 2.0),
    ("Lead", 3.0),
    ("Developer", 4.0),
    ("DevOps", 4.0),
    ("QA", 4.0),
    ("Intern", 5.0),
];

/// Seed the default designation ladder when no designations exist yet.
///
/// Returns the number of designations written (0 when the store already
/// had any).
pub fn seed_designations<S: HierarchyStore>(
    protocol: &mut MutationProtocol<S>,
) -> Result<usize, HierarchyError> {
    if !protocol.store().designations()?.is_empty() {
        return Ok(0);
    }

    for (title, rank) in DEFAULT_LADDER {
        protocol
            .store_mut()
            .save_designation(&Designation::new(title, rank))?;
    }

    tracing::info!(count = DEFAULT_LADDER.len(), "Seeded default designation ladder");
    Ok(DEFAULT_LADDER.len())
}

/// Seed a demonstration roster when no employees exist yet.
///
/// Goes through `create_employee` so every rank and root invariant is
/// enforced on the seed data itself. Expects the default ladder (or a
/// compatible one) to be present. Returns the number of employees
/// created.
pub fn seed_demo_roster<S: HierarchyStore>(
    protocol: &mut MutationProtocol<S>,
) -> Result<usize, HierarchyError> {
    if !protocol.employees()?.is_empty() {
        return Ok(0);
    }

    let thor = protocol.create_employee("Thor", "Director", None)?;
    let stark = protocol.create_employee("Iron Man", "Manager", Some(thor.id))?;
    let rogers = protocol.create_employee("Captain America", "Manager", Some(thor.id))?;
    let banner = protocol.create_employee("Hulk", "Lead", Some(stark.id))?;
    protocol.create_employee("Black Widow", "Developer", Some(banner.id))?;
    protocol.create_employee("Hawkeye", "QA", Some(rogers.id))?;

    tracing::info!(count = 6, "Seeded demonstration roster");
    Ok(6)
}
