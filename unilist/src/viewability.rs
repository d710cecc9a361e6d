//! Normalizes the underlying surface's visibility reports into logical item
//! indices.
//!
//! Both entry points return [`VisibleRange::EMPTY`] (`(-1, -1)`) when nothing
//! is visible. The drivers in `unilist-adapter` dispatch the caller's
//! `on_visible_items_changed` callback exactly once per underlying event,
//! including the empty case.

use crate::types::VisibleRange;

/// Normalizes a native-style report: an unordered set of viewable indices,
/// already filtered by the engine's own viewability threshold.
///
/// Returns the `{min, max}` bounds of the set.
pub fn from_viewable_slots(viewable: impl IntoIterator<Item = usize>) -> VisibleRange {
    let mut bounds: Option<(usize, usize)> = None;
    for index in viewable {
        bounds = Some(match bounds {
            None => (index, index),
            Some((min, max)) => (min.min(index), max.max(index)),
        });
    }
    match bounds {
        None => VisibleRange::EMPTY,
        Some((min, max)) => VisibleRange::new(min as isize, max as isize),
    }
}

/// Normalizes a windowed-style report: an inclusive, contiguous
/// `[start_slot, stop_slot]` range.
///
/// Both bounds shift by −1 when an inner header occupies slot 0, so the
/// returned indices land in data-index space. No footer adjustment is needed:
/// the footer only changes which slot the upper bound names, not the index
/// arithmetic. A range covering only the header slot therefore reports
/// `(-1, -1)`.
pub fn from_rendered_range(
    start_slot: usize,
    stop_slot: usize,
    has_inner_header: bool,
) -> VisibleRange {
    let fix = isize::from(has_inner_header);
    VisibleRange::new(start_slot as isize - fix, stop_slot as isize - fix)
}
