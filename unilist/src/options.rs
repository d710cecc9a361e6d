use std::sync::Arc;

use crate::slot::SlotMap;
use crate::types::PointerEvents;

/// Produces the uniqueness key for an item.
///
/// Keys must be unique within the current data sequence; the core does not
/// check this, and duplicate keys are undefined behavior.
pub type GetItemKey<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Produces an item's length along the scroll axis, in pixels.
///
/// Sizes must be non-negative; zero is legal.
pub type GetItemSize<T> = Arc<dyn Fn(&T, usize) -> f64 + Send + Sync>;

/// Fired when the set of visible logical items changes; `(-1, -1)` means
/// nothing is visible.
pub type OnVisibleItemsChanged = Arc<dyn Fn(isize, isize) + Send + Sync>;

/// Header or footer configuration.
///
/// The renderer itself lives in the UI layer; the core only tracks whether
/// one was supplied. An edge without a renderer (or without a positive size)
/// is omitted entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSpec {
    pub size: f64,
    /// Sticky edges mount outside the virtualized region, always visible
    /// regardless of scroll position, and never occupy a slot.
    pub sticky: bool,
    pub has_renderer: bool,
}

impl EdgeSpec {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            sticky: false,
            has_renderer: true,
        }
    }

    pub fn sticky(size: f64) -> Self {
        Self {
            size,
            sticky: true,
            has_renderer: true,
        }
    }
}

/// Separator configuration.
///
/// Contributes `size` strictly between consecutive item slots: never before
/// the first item, never after the last, never adjacent to header/footer
/// slots.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorSpec {
    pub size: f64,
    pub has_renderer: bool,
}

impl SeparatorSpec {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            has_renderer: true,
        }
    }
}

/// Configuration for one list instance.
///
/// Cheap to clone: the data sequence and the accessors are stored in `Arc`s,
/// so an embedding UI can tweak a few fields and commit the result via
/// [`crate::ListModel::set_options`] without copying item data.
pub struct ListOptions<T> {
    /// Ordered item sequence; drives the slot count. Never mutated here.
    pub data: Arc<[T]>,
    pub get_item_key: GetItemKey<T>,
    pub get_item_size: GetItemSize<T>,
    /// Fallback size hint for the window-budget math.
    pub estimated_item_size: f64,
    /// Scales the render-ahead budget; see [`crate::compute_window`].
    pub overscan_count: usize,
    pub header: Option<EdgeSpec>,
    pub footer: Option<EdgeSpec>,
    pub item_separator: Option<SeparatorSpec>,
    /// Scroll-axis selection: `true` virtualizes along the x axis.
    pub horizontal: bool,
    pub on_visible_items_changed: Option<OnVisibleItemsChanged>,
    /// Whether the UI layer supplied an empty-state renderer
    /// (mounted instead of the virtualization surface when `data` is empty).
    pub has_empty_renderer: bool,
    pub pointer_events: PointerEvents,
}

impl<T> ListOptions<T> {
    pub fn new(
        data: impl Into<Arc<[T]>>,
        get_item_key: impl Fn(&T, usize) -> String + Send + Sync + 'static,
        get_item_size: impl Fn(&T, usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            data: data.into(),
            get_item_key: Arc::new(get_item_key),
            get_item_size: Arc::new(get_item_size),
            estimated_item_size: 0.0,
            overscan_count: 1,
            header: None,
            footer: None,
            item_separator: None,
            horizontal: false,
            on_visible_items_changed: None,
            has_empty_renderer: false,
            pointer_events: PointerEvents::Auto,
        }
    }

    pub fn with_data(mut self, data: impl Into<Arc<[T]>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    pub fn with_header(mut self, header: Option<EdgeSpec>) -> Self {
        self.header = header;
        self
    }

    pub fn with_footer(mut self, footer: Option<EdgeSpec>) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_item_separator(mut self, item_separator: Option<SeparatorSpec>) -> Self {
        self.item_separator = item_separator;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_on_visible_items_changed(
        mut self,
        f: Option<impl Fn(isize, isize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visible_items_changed = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_empty_renderer(mut self, has_empty_renderer: bool) -> Self {
        self.has_empty_renderer = has_empty_renderer;
        self
    }

    pub fn with_pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = pointer_events;
        self
    }

    pub fn item_count(&self) -> usize {
        self.data.len()
    }

    pub fn item_key(&self, index: usize) -> String {
        (self.get_item_key)(&self.data[index], index)
    }

    pub fn item_size(&self, index: usize) -> f64 {
        (self.get_item_size)(&self.data[index], index)
    }

    /// Effective separator size: zero when unconfigured, missing a renderer,
    /// or non-positively sized.
    pub fn separator_size(&self) -> f64 {
        match &self.item_separator {
            Some(sep) if sep.has_renderer && sep.size > 0.0 => sep.size,
            _ => 0.0,
        }
    }

    /// Size of the header slot inside the virtualized region, or zero when
    /// the header is sticky, missing, missing a renderer, or non-positively
    /// sized.
    pub fn inner_header_size(&self) -> f64 {
        inner_edge_size(&self.header)
    }

    /// The footer-side counterpart of [`Self::inner_header_size`].
    pub fn inner_footer_size(&self) -> f64 {
        inner_edge_size(&self.footer)
    }

    pub fn has_inner_header(&self) -> bool {
        self.inner_header_size() > 0.0
    }

    pub fn has_inner_footer(&self) -> bool {
        self.inner_footer_size() > 0.0
    }

    /// Slot mapping for the current configuration.
    pub fn slot_map(&self) -> SlotMap {
        SlotMap::new(
            self.has_inner_header(),
            self.has_inner_footer(),
            self.data.len(),
        )
    }
}

fn inner_edge_size(edge: &Option<EdgeSpec>) -> f64 {
    match edge {
        Some(e) if e.has_renderer && !e.sticky && e.size > 0.0 => e.size,
        _ => 0.0,
    }
}

impl<T> Clone for ListOptions<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            get_item_key: Arc::clone(&self.get_item_key),
            get_item_size: Arc::clone(&self.get_item_size),
            estimated_item_size: self.estimated_item_size,
            overscan_count: self.overscan_count,
            header: self.header,
            footer: self.footer,
            item_separator: self.item_separator,
            horizontal: self.horizontal,
            on_visible_items_changed: self.on_visible_items_changed.clone(),
            has_empty_renderer: self.has_empty_renderer,
            pointer_events: self.pointer_events,
        }
    }
}

impl<T> core::fmt::Debug for ListOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("item_count", &self.data.len())
            .field("estimated_item_size", &self.estimated_item_size)
            .field("overscan_count", &self.overscan_count)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("item_separator", &self.item_separator)
            .field("horizontal", &self.horizontal)
            .field("has_empty_renderer", &self.has_empty_renderer)
            .field("pointer_events", &self.pointer_events)
            .finish_non_exhaustive()
    }
}
