use unilist::{
    Align, LayoutUpdate, ListOptions, OnVisibleItemsChanged, SlotMap, ViewportSize, VisibleRange,
    from_rendered_range,
};

use crate::surface::{SlotOutOfBounds, Surface, WindowedScrollable};

/// Driver for a windowed-list-style virtualization engine.
///
/// The engine addresses synthetic slot indices (inner header/footer
/// included), reports contiguous rendered ranges, and caches measured layout
/// that has to be reset when slot sizes change. Logical indices are mapped
/// through the slot table before they reach the engine, so an inner header
/// never skews scroll targets. This surface defaults unspecified alignment to
/// `Smart` and defers that placement to the engine's own heuristic.
pub struct WindowedSurface<E> {
    engine: E,
    slots: SlotMap,
    horizontal: bool,
    overscan_count: usize,
    viewport: ViewportSize,
    on_visible_items_changed: Option<OnVisibleItemsChanged>,
}

impl<E: WindowedScrollable> WindowedSurface<E> {
    pub fn new(engine: E, slots: SlotMap) -> Self {
        Self {
            engine,
            slots,
            horizontal: false,
            overscan_count: 1,
            viewport: ViewportSize::default(),
            on_visible_items_changed: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn slots(&self) -> SlotMap {
        self.slots
    }

    /// Syncs the driver with a committed option set.
    pub fn configure<T>(&mut self, options: &ListOptions<T>) {
        self.slots = options.slot_map();
        self.horizontal = options.horizontal;
        self.overscan_count = options.overscan_count;
        self.on_visible_items_changed = options.on_visible_items_changed.clone();
    }

    /// Overscan handed to the engine as-is; this engine does its own
    /// render-ahead math.
    pub fn overscan_count(&self) -> usize {
        self.overscan_count
    }

    /// Feeds a measurement from the viewport-sizing collaborator.
    pub fn on_viewport_change(&mut self, viewport: ViewportSize) {
        ltrace!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        self.viewport = viewport;
    }

    /// Whether the engine should be mounted at all.
    ///
    /// The surface stays unmounted until the measured extent along the scroll
    /// axis is positive.
    pub fn is_mountable(&self) -> bool {
        self.viewport.main_extent(self.horizontal) > 0.0
    }

    /// Applies a layout commit: adopts the new slot mapping and forwards the
    /// invalidation point to the engine's cached layout.
    pub fn apply_update(&mut self, update: &LayoutUpdate) {
        self.slots = update.slots;
        if let Some(slot) = update.reset_from {
            ldebug!(slot, "resetting engine layout cache");
            self.engine.reset_after_slot(slot);
        }
    }

    /// Entry point for the engine's rendered-range reports (inclusive slot
    /// bounds).
    ///
    /// Dispatches `on_visible_items_changed` exactly once per call, in
    /// data-index space.
    pub fn on_slots_rendered(&self, start_slot: usize, stop_slot: usize) -> VisibleRange {
        let range = from_rendered_range(start_slot, stop_slot, self.slots.has_inner_header());
        if let Some(cb) = &self.on_visible_items_changed {
            cb(range.from_index, range.to_index);
        }
        range
    }
}

impl<E: WindowedScrollable> Surface for WindowedSurface<E> {
    fn default_alignment(&self) -> Align {
        Align::Smart
    }

    fn scroll_to_start(&mut self) {
        self.engine.scroll_to(0.0);
    }

    fn scroll_to_end(&mut self) {
        let count = self.slots.item_count();
        if count == 0 {
            return;
        }
        // Start alignment on the last item leaves it fully visible at the
        // trailing edge.
        let slot = self.slots.slot_for_data_index(count - 1);
        if self.engine.scroll_to_slot(slot, Align::Start).is_err() {
            lwarn!(slot, "scroll_to_end ignored by engine");
        }
    }

    fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<(), SlotOutOfBounds> {
        if index >= self.slots.item_count() {
            return Err(SlotOutOfBounds {
                slot: index,
                measured_slots: self.slots.slot_count(),
            });
        }
        self.engine
            .scroll_to_slot(self.slots.slot_for_data_index(index), align)
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for WindowedSurface<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedSurface")
            .field("engine", &self.engine)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
