use crate::invalidate::ListState;
use crate::options::ListOptions;
use crate::plan::FramePlan;
use crate::slot::{FOOTER_KEY, HEADER_KEY, SlotMap};
use crate::types::{LayoutEntry, Slot};
use crate::{layout, window};

/// Result of committing a new option set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutUpdate {
    /// First slot whose layout changed, or `None` when the previous entry
    /// table was reused (or nothing was cached to invalidate). The windowed
    /// surface forwards this to its engine's cached-layout reset.
    pub reset_from: Option<usize>,
    /// Slot mapping for the committed options.
    pub slots: SlotMap,
}

/// One list instance's configuration and derived layout.
///
/// This is the single commit point: every data or size-function change goes
/// through [`Self::set_options`], which runs the invalidation check and
/// recomputes only the affected layout suffix. All methods are synchronous
/// and run on the caller's thread; a commit is expected between the measure
/// pass that produced new sizes and the next paint, so the surface never
/// paints a stale layout.
pub struct ListModel<T> {
    options: ListOptions<T>,
    slots: SlotMap,
    state: ListState,
}

impl<T> ListModel<T> {
    pub fn new(options: ListOptions<T>) -> Self {
        ldebug!(
            item_count = options.item_count(),
            slot_count = options.slot_map().slot_count(),
            "ListModel::new"
        );
        let mut model = Self {
            slots: options.slot_map(),
            state: ListState::new(),
            options,
        };
        model.commit();
        model
    }

    pub fn options(&self) -> &ListOptions<T> {
        &self.options
    }

    pub fn slots(&self) -> SlotMap {
        self.slots
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.slot_count()
    }

    pub fn slot_at(&self, slot: usize) -> Option<Slot> {
        self.slots.slot_at(slot)
    }

    /// The committed entry table, one entry per slot.
    pub fn layout(&self) -> &[LayoutEntry] {
        self.state.entries()
    }

    pub fn entry(&self, slot: usize) -> Option<LayoutEntry> {
        self.state.entries().get(slot).copied()
    }

    /// A slot's extent: its length plus the trailing separator contribution.
    pub fn slot_extent(&self, slot: usize) -> Option<f64> {
        self.state.extents().get(slot).copied()
    }

    /// Total content size along the scroll axis.
    pub fn total_size(&self) -> f64 {
        self.state.total_size()
    }

    /// Uniqueness key for a slot; inner header/footer slots use the reserved
    /// `"header"`/`"footer"` keys.
    pub fn slot_key(&self, slot: usize) -> Option<String> {
        match self.slots.slot_at(slot)? {
            Slot::Header => Some(HEADER_KEY.to_owned()),
            Slot::Footer => Some(FOOTER_KEY.to_owned()),
            Slot::Item(data_index) => Some(self.options.item_key(data_index)),
        }
    }

    /// Replaces the configuration and commits the resulting layout.
    pub fn set_options(&mut self, options: ListOptions<T>) -> LayoutUpdate {
        self.options = options;
        self.slots = self.options.slot_map();
        let reset_from = self.commit();
        ltrace!(
            slot_count = self.slots.slot_count(),
            ?reset_from,
            "ListModel::set_options"
        );
        LayoutUpdate {
            reset_from,
            slots: self.slots,
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Self::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions<T>)) -> LayoutUpdate {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Render-ahead budget for the given viewport extent.
    pub fn window_budget(&self, viewport_extent: f64) -> usize {
        window::compute_window(
            viewport_extent,
            self.options.estimated_item_size,
            self.options.overscan_count,
        )
    }

    /// The chrome to mount around (or instead of) the virtualized region.
    pub fn frame_plan(&self) -> FramePlan {
        FramePlan::for_options(&self.options)
    }

    fn commit(&mut self) -> Option<usize> {
        let lengths = layout::slot_lengths(&self.options);
        let extents = layout::slot_extents(&self.options);
        self.state.commit(lengths, extents)
    }
}

impl<T> core::fmt::Debug for ListModel<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListModel")
            .field("options", &self.options)
            .field("slots", &self.slots)
            .field("total_size", &self.state.total_size())
            .finish_non_exhaustive()
    }
}
