//! Headless core for a cross-platform virtualized list.
//!
//! One uniform contract — data, item sizing, header/footer, separators,
//! scroll control, visible-range notification — served over two different
//! underlying rendering surfaces, so application code never has to know which
//! surface is active. This crate is the windowing/layout math the surfaces
//! share:
//!
//! - mapping the logical item array plus header/footer/separator
//!   configuration to the synthetic slot sequence the renderer iterates
//! - computing every slot's pixel offset and length from a caller-supplied
//!   per-item size function, recomputing only the affected suffix when sizes
//!   change
//! - normalizing the renderer's visible-range reports back into logical item
//!   indices
//! - the render-ahead window budget from viewport extent, estimated item
//!   size, and overscan count
//!
//! It is UI-agnostic: painting, scroll physics, recycling, and viewport
//! measurement belong to the embedding UI. For the surface drivers and the
//! imperative scroll controller, see the `unilist-adapter` crate.
//!
//! Everything here is synchronous and single-threaded; a layout commit is
//! expected to run after the measure pass that produced new sizes and before
//! the next paint.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod invalidate;
mod layout;
mod model;
mod options;
mod plan;
mod slot;
mod types;
mod viewability;
mod window;


pub use invalidate::{ListState, first_differing_index};
pub use layout::{
    compute_item_layout, entries_from, recompute_entries_from, slot_extents, slot_lengths,
    total_size,
};
pub use model::{LayoutUpdate, ListModel};
pub use options::{
    EdgeSpec, GetItemKey, GetItemSize, ListOptions, OnVisibleItemsChanged, SeparatorSpec,
};
pub use plan::{BodyPlan, FramePlan};
pub use slot::{FOOTER_KEY, HEADER_KEY, SlotMap};
pub use types::{Align, LayoutEntry, PointerEvents, Slot, ViewportSize, VisibleRange};
pub use viewability::{from_rendered_range, from_viewable_slots};
pub use window::compute_window;
