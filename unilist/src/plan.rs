//! The fixed chrome mounted around (or instead of) the virtualized region.

use crate::options::{EdgeSpec, ListOptions};
use crate::types::PointerEvents;

/// What the body of the list should contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyPlan {
    /// Mount the virtualization surface over `slot_count` slots.
    Virtualized { slot_count: usize },
    /// Data is empty and an empty-state renderer was supplied.
    EmptyState,
    /// Nothing to mount.
    Nothing,
}

/// Mount plan for one frame of the list.
///
/// Sticky edges live here, outside the virtualized region. When the data is
/// empty the virtualization surface is omitted entirely and non-sticky edges
/// fall back to the outer position as well, so a header/footer never
/// disappears just because the list has no items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramePlan {
    /// Render the header outside the virtualized region.
    pub outer_header: bool,
    /// Render the footer outside the virtualized region.
    pub outer_footer: bool,
    pub body: BodyPlan,
    pub pointer_events: PointerEvents,
}

impl FramePlan {
    pub fn for_options<T>(options: &ListOptions<T>) -> Self {
        let empty = options.item_count() == 0;
        let body = if !empty {
            BodyPlan::Virtualized {
                slot_count: options.slot_map().slot_count(),
            }
        } else if options.has_empty_renderer {
            BodyPlan::EmptyState
        } else {
            BodyPlan::Nothing
        };
        Self {
            outer_header: mounts_outside(&options.header, empty),
            outer_footer: mounts_outside(&options.footer, empty),
            body,
            pointer_events: options.pointer_events,
        }
    }
}

fn mounts_outside(edge: &Option<EdgeSpec>, data_is_empty: bool) -> bool {
    match edge {
        Some(e) => e.has_renderer && e.size > 0.0 && (e.sticky || data_is_empty),
        None => false,
    }
}
