//! Fractional rank allocation for new designations.
//!
//! Ranks are real numbers on a totally ordered scale where smaller means
//! more senior. A new designation is positioned directly below an
//! existing "anchor" designation by taking the arithmetic midpoint
//! between the anchor's rank and the next more junior rank, so no
//! existing designation is ever renumbered. A designation can instead be
//! created as a peer of its anchor by tying at the anchor's exact rank.
//!
//! Known limitation: repeated midpoint insertion below the same anchor
//! halves the gap each time, so a very long insertion chain eventually
//! exhausts f64 precision. There is no rebalancing pass; issued ranks
//! are immutable for the lifetime of the store.

use orgchart_model::constants::ROOT_RANK;
use orgchart_model::{Designation, DesignationId};
use orgchart_store::HierarchyStore;

use crate::HierarchyError;

/// Picks rank values for new designations relative to existing ones.
///
/// Stateless: every allocation reads the current designation set from
/// the store, so repeated calls with the same anchor return the same
/// value until a record is actually persisted at that rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankAllocator;

impl RankAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the rank for a designation positioned directly below
    /// `anchor`, or at the anchor's own rank when `tie_with_anchor`.
    ///
    /// With an empty designation set the caller is creating the root and
    /// the fixed sentinel [`ROOT_RANK`] is returned. Once designations
    /// exist an anchor is mandatory; an unresolvable anchor id fails
    /// with [`HierarchyError::InvalidAnchor`].
    pub fn allocate(
        &self,
        store: &dyn HierarchyStore,
        anchor: Option<DesignationId>,
        tie_with_anchor: bool,
    ) -> Result<f64, HierarchyError> {
        let ordered = store.designations_by_rank_ascending()?;
        if ordered.is_empty() {
            return Ok(ROOT_RANK);
        }

        let anchor_id = anchor.ok_or(HierarchyError::AnchorRequired)?;
        let anchor = store
            .designation_by_id(anchor_id)?
            .ok_or(HierarchyError::InvalidAnchor(anchor_id))?;

        if tie_with_anchor {
            return Ok(anchor.rank);
        }

        Ok(Self::first_rank_below(&ordered, &anchor))
    }

    /// The first available rank strictly below `anchor` that preserves
    /// the total order: the midpoint to the next more junior rank, or
    /// `anchor.rank + 1` when the anchor is currently the most junior
    /// designation.
    fn first_rank_below(ordered: &[Designation], anchor: &Designation) -> f64 {
        match ordered.iter().find(|d| d.rank > anchor.rank) {
            Some(next) => (anchor.rank + next.rank) / 2.0,
            None => anchor.rank + 1.0,
        }
    }
}
