//! Size-change detection and the per-list layout snapshot.

use crate::layout;
use crate::types::LayoutEntry;

/// Returns the first index at which two per-slot size tables differ.
///
/// Compares element-wise up to the shorter length. When the compared prefix
/// is equal but the lengths differ, returns the last common index: a length
/// change can shift every subsequent offset even if no individual size
/// changed. Growing from (or shrinking to) an empty table returns `None` —
/// there is nothing cached to invalidate.
///
/// `None` with equal lengths means the previous layout can be reused as-is.
pub fn first_differing_index(previous: &[f64], new: &[f64]) -> Option<usize> {
    let common = previous.len().min(new.len());
    for i in 0..common {
        if previous[i] != new[i] {
            return Some(i);
        }
    }
    if previous.len() != new.len() {
        return common.checked_sub(1);
    }
    None
}

/// One list instance's committed layout: the last per-slot extent table and
/// the entry table derived from it.
///
/// Owned by exactly one [`crate::ListModel`]; created on first layout,
/// replaced on every data/size change, discarded with the list instance.
#[derive(Clone, Debug, Default)]
pub struct ListState {
    extents: Vec<f64>,
    entries: Vec<LayoutEntry>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn extents(&self) -> &[f64] {
        &self.extents
    }

    pub fn slot_count(&self) -> usize {
        self.extents.len()
    }

    pub fn total_size(&self) -> f64 {
        layout::total_size(&self.extents)
    }

    /// Commits a new per-slot size configuration.
    ///
    /// Runs the invalidation check against the previous extent table and
    /// recomputes only the affected suffix of the entry table. Returns the
    /// first slot whose layout changed, or `None` when the previous entry
    /// table was kept (recomputing fully would also be correct, just
    /// wasteful).
    pub fn commit(&mut self, lengths: Vec<f64>, extents: Vec<f64>) -> Option<usize> {
        debug_assert_eq!(lengths.len(), extents.len());
        let reset_from = first_differing_index(&self.extents, &extents);
        match reset_from {
            Some(start) => {
                layout::recompute_entries_from(&mut self.entries, &lengths, &extents, start);
            }
            None if self.extents.len() != extents.len() => {
                // One of the tables is empty: nothing to invalidate, but the
                // entry table still has to match the new slot count.
                self.entries = layout::entries_from(&lengths, &extents);
            }
            None => {}
        }
        self.extents = extents;
        reset_from
    }
}
