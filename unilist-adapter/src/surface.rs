use core::fmt;

use unilist::Align;

/// Raised by an engine when a slot cannot be resolved to an on-screen
/// position (typically: outside the measured range).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotOutOfBounds {
    /// The slot the engine was asked to address.
    pub slot: usize,
    /// The layout bound the engine knew about at the time.
    pub measured_slots: usize,
}

impl fmt::Display for SlotOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {} outside measured range (0..{})",
            self.slot, self.measured_slots
        )
    }
}

impl std::error::Error for SlotOutOfBounds {}

/// The uniform scroll contract over whichever rendering surface is active.
///
/// Implemented by [`crate::NativeSurface`] and [`crate::WindowedSurface`];
/// the variant is selected at construction and application code only ever
/// sees this trait. Indices are logical (data-index space) on both variants.
pub trait Surface {
    /// Alignment applied when a scroll-to-index request carries none.
    fn default_alignment(&self) -> Align;

    /// Moves the viewport to the start of the content, no animation.
    fn scroll_to_start(&mut self);

    /// Moves the viewport so the last logical item is fully visible, no
    /// animation.
    fn scroll_to_end(&mut self);

    /// Scrolls so the item at `index` obeys `align`.
    fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<(), SlotOutOfBounds>;
}

/// Primitive operations of a native-style virtualization engine.
///
/// This engine addresses logical data indices directly — its header and
/// footer are mounted by the engine itself and are not slots — and places
/// items by a viewport-relative position instead of a pixel alignment.
pub trait NativeScrollable {
    /// Sets the viewport offset in pixels, no animation.
    fn scroll_to_offset(&mut self, offset: f64);

    /// Scrolls to the end of the content, no animation.
    fn scroll_to_end(&mut self);

    /// Scrolls to an item; `view_position` places its start at that fraction
    /// of the viewport (0.0 = start, 0.5 = center, 1.0 = end).
    fn scroll_to_item(&mut self, index: usize, view_position: f64) -> Result<(), SlotOutOfBounds>;
}

/// Primitive operations of a windowed-list-style virtualization engine.
///
/// This engine addresses synthetic slot indices (inner header/footer
/// included) and caches measured layout that must be reset when slot sizes
/// change.
pub trait WindowedScrollable {
    /// Sets the viewport offset in pixels, no animation.
    fn scroll_to(&mut self, offset: f64);

    /// Scrolls so `slot` obeys `align`. `Align::Smart` uses the engine's own
    /// placement heuristic.
    fn scroll_to_slot(&mut self, slot: usize, align: Align) -> Result<(), SlotOutOfBounds>;

    /// Drops cached layout at and after `slot`.
    fn reset_after_slot(&mut self, slot: usize);
}
