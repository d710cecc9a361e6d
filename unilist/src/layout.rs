//! Layout computation over the slot sequence.
//!
//! A single left-to-right scan assigns every slot an offset and a length. A
//! slot's *extent* (its length plus the trailing separator contribution, if
//! any) advances the next slot's offset, so
//! `entries[i].offset == sum(extents[..i])`.
//!
//! The separator rule: a separator follows item `i` iff `i + 1 < item_count`.
//! Never after the last item, and never adjacent to header/footer slots.

use crate::options::ListOptions;
use crate::types::LayoutEntry;

/// Computes layout entries for the data slots only.
///
/// Header/footer slots have constant lengths taken from their specs; the full
/// slot table is built by [`slot_lengths`]/[`slot_extents`], which prepend and
/// append them around this scan. Runs in O(n).
pub fn compute_item_layout<T, F>(data: &[T], get_item_size: F, separator_size: f64) -> Vec<LayoutEntry>
where
    F: Fn(&T, usize) -> f64,
{
    let mut entries = Vec::with_capacity(data.len());
    let mut offset = 0.0;
    for (index, item) in data.iter().enumerate() {
        let length = get_item_size(item, index);
        entries.push(LayoutEntry { offset, length });
        offset += length;
        if index + 1 < data.len() {
            offset += separator_size;
        }
    }
    entries
}

/// Per-slot lengths for the full slot table, inner header/footer included.
pub fn slot_lengths<T>(options: &ListOptions<T>) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(options.slot_map().slot_count());
    let header = options.inner_header_size();
    if header > 0.0 {
        lengths.push(header);
    }
    for (index, item) in options.data.iter().enumerate() {
        lengths.push((options.get_item_size)(item, index));
    }
    let footer = options.inner_footer_size();
    if footer > 0.0 {
        lengths.push(footer);
    }
    lengths
}

/// Per-slot extents: each slot's length plus its trailing separator
/// contribution.
///
/// This is the table the invalidation detector compares between commits.
pub fn slot_extents<T>(options: &ListOptions<T>) -> Vec<f64> {
    let separator = options.separator_size();
    let count = options.item_count();
    let mut extents = Vec::with_capacity(options.slot_map().slot_count());
    let header = options.inner_header_size();
    if header > 0.0 {
        extents.push(header);
    }
    for (index, item) in options.data.iter().enumerate() {
        let mut extent = (options.get_item_size)(item, index);
        if index + 1 < count {
            extent += separator;
        }
        extents.push(extent);
    }
    let footer = options.inner_footer_size();
    if footer > 0.0 {
        extents.push(footer);
    }
    extents
}

/// Builds the full entry table from per-slot lengths and extents.
pub fn entries_from(lengths: &[f64], extents: &[f64]) -> Vec<LayoutEntry> {
    debug_assert_eq!(lengths.len(), extents.len());
    let mut entries = Vec::with_capacity(lengths.len());
    let mut offset = 0.0;
    for (i, &length) in lengths.iter().enumerate() {
        entries.push(LayoutEntry { offset, length });
        offset += extents[i];
    }
    entries
}

/// Recomputes `entries[start..]` in place, in O(len − start).
///
/// `entries[..start]` must already agree with `lengths`/`extents`; the suffix
/// is rebuilt from the entry immediately preceding `start`.
pub fn recompute_entries_from(
    entries: &mut Vec<LayoutEntry>,
    lengths: &[f64],
    extents: &[f64],
    start: usize,
) {
    debug_assert_eq!(lengths.len(), extents.len());
    let start = start.min(lengths.len());
    entries.truncate(start);
    let mut offset = match entries.last() {
        Some(prev) => prev.offset + extents[entries.len() - 1],
        None => 0.0,
    };
    for i in start..lengths.len() {
        entries.push(LayoutEntry {
            offset,
            length: lengths[i],
        });
        offset += extents[i];
    }
}

/// Total content size along the scroll axis: the sum of all slot extents.
pub fn total_size(extents: &[f64]) -> f64 {
    extents.iter().sum()
}
