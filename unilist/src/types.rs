/// Alignment policy for scroll-to-index requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Let the active surface pick a placement. The windowed surface defers
    /// to its engine's own heuristic; the native surface has no such
    /// primitive and degrades this to `Center`.
    Smart,
}

/// A synthetic rendering position in the virtualized sequence.
///
/// At most one `Header` slot exists (a non-sticky header with a renderer and
/// a positive size), and symmetrically for `Footer`. Sticky edges never
/// occupy a slot; they are mounted outside the virtualized region (see
/// [`crate::FramePlan`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Header,
    Item(usize),
    Footer,
}

/// Computed offset and length of one slot along the scroll axis.
///
/// Offsets are cumulative: a slot's *extent* (its length plus the trailing
/// separator contribution, if any) advances the next slot's offset. Sizes are
/// non-negative pixels; zero-length entries are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEntry {
    /// Cumulative pixel start of the slot.
    pub offset: f64,
    /// Length of the slot (excludes any trailing separator).
    pub length: f64,
}

impl LayoutEntry {
    pub fn end(&self) -> f64 {
        self.offset + self.length
    }
}

/// A visible range in logical item-index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub from_index: isize,
    pub to_index: isize,
}

impl VisibleRange {
    /// Nothing is visible.
    pub const EMPTY: Self = Self {
        from_index: -1,
        to_index: -1,
    };

    pub fn new(from_index: isize, to_index: isize) -> Self {
        Self {
            from_index,
            to_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Available space as reported by the viewport-measuring collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along the scroll axis.
    pub fn main_extent(&self, horizontal: bool) -> f64 {
        if horizontal { self.width } else { self.height }
    }
}

/// Hit-testing passthrough mode, forwarded to the mounted chrome untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
    BoxNone,
    BoxOnly,
}
