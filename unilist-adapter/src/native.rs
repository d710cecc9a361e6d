use unilist::{
    Align, ListOptions, OnVisibleItemsChanged, ViewportSize, VisibleRange, compute_window,
    from_viewable_slots,
};

use crate::surface::{NativeScrollable, SlotOutOfBounds, Surface};

/// Engine tuning carried by the native driver.
///
/// The defaults suit a mobile list under steady scrolling: small render
/// batches committed immediately, scroll events at 60 Hz, and a 1% visibility
/// threshold so an item counts as viewable almost as soon as it enters the
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeTuning {
    /// Items rendered per batch while filling the window.
    pub max_render_batch: usize,
    /// Delay between render batches, in milliseconds.
    pub batch_period_ms: u64,
    /// Minimum interval between scroll events, in milliseconds.
    pub scroll_event_throttle_ms: u64,
    /// Percentage of an item that must be visible before the engine flags it
    /// viewable.
    pub viewable_percent_threshold: f64,
}

impl Default for NativeTuning {
    fn default() -> Self {
        Self {
            max_render_batch: 2,
            batch_period_ms: 0,
            scroll_event_throttle_ms: 16,
            viewable_percent_threshold: 1.0,
        }
    }
}

/// Driver for a native-style virtualization engine.
///
/// The engine addresses logical data indices directly, reports viewability as
/// an unordered set of indices filtered by its own threshold, and exposes a
/// viewport-relative `scroll_to_item` instead of pixel alignment. Lacking
/// pixel-offset placement for individual items, this surface defaults
/// unspecified alignment to `Center`.
pub struct NativeSurface<E> {
    engine: E,
    tuning: NativeTuning,
    horizontal: bool,
    estimated_item_size: f64,
    overscan_count: usize,
    viewport: ViewportSize,
    on_visible_items_changed: Option<OnVisibleItemsChanged>,
}

impl<E: NativeScrollable> NativeSurface<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            tuning: NativeTuning::default(),
            horizontal: false,
            estimated_item_size: 0.0,
            overscan_count: 1,
            viewport: ViewportSize::default(),
            on_visible_items_changed: None,
        }
    }

    pub fn with_tuning(mut self, tuning: NativeTuning) -> Self {
        self.tuning = tuning;
        self
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

    pub fn tuning(&self) -> NativeTuning {
        self.tuning
    }

    /// Syncs the driver with a committed option set.
    pub fn configure<T>(&mut self, options: &ListOptions<T>) {
        self.horizontal = options.horizontal;
        self.estimated_item_size = options.estimated_item_size;
        self.overscan_count = options.overscan_count;
        self.on_visible_items_changed = options.on_visible_items_changed.clone();
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

    /// Render-ahead budget for the current viewport; recomputed from the
    /// committed estimate/overscan on every call.
    pub fn window_budget(&self) -> usize {
        compute_window(
            self.viewport.main_extent(self.horizontal),
            self.estimated_item_size,
            self.overscan_count,
        )
    }

    /// Entry point for the engine's viewability reports: an unordered set of
    /// viewable indices, already filtered by the engine's threshold.
    ///
    /// Dispatches `on_visible_items_changed` exactly once per call, with
    /// `(-1, -1)` when the set is empty.
    pub fn on_viewable_items_changed(
        &self,
        viewable: impl IntoIterator<Item = usize>,
    ) -> VisibleRange {
        let range = from_viewable_slots(viewable);
        if let Some(cb) = &self.on_visible_items_changed {
            cb(range.from_index, range.to_index);
        }
        range
    }
}

fn view_position(align: Align) -> f64 {
    match align {
        Align::Start => 0.0,
        Align::End => 1.0,
        // This engine has no smart primitive; center is the documented
        // fallback.
        Align::Center | Align::Smart => 0.5,
    }
}

impl<E: NativeScrollable> Surface for NativeSurface<E> {
    fn default_alignment(&self) -> Align {
        Align::Center
    }

    fn scroll_to_start(&mut self) {
        self.engine.scroll_to_offset(0.0);
    }

    fn scroll_to_end(&mut self) {
        self.engine.scroll_to_end();
    }

    fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<(), SlotOutOfBounds> {
        self.engine.scroll_to_item(index, view_position(align))
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for NativeSurface<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NativeSurface")
            .field("engine", &self.engine)
            .field("tuning", &self.tuning)
            .field("horizontal", &self.horizontal)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
