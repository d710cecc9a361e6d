use crate::types::Slot;

/// Reserved uniqueness key for the inner header slot.
pub const HEADER_KEY: &str = "header";
/// Reserved uniqueness key for the inner footer slot.
pub const FOOTER_KEY: &str = "footer";

/// Maps between logical item indices and synthetic slot indices.
///
/// `slot_count = item_count + has_inner_header + has_inner_footer`. The inner
/// header, when present, always occupies slot 0 and the inner footer the last
/// slot; everything in between is an item slot shifted by the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotMap {
    has_inner_header: bool,
    has_inner_footer: bool,
    item_count: usize,
}

impl SlotMap {
    pub fn new(has_inner_header: bool, has_inner_footer: bool, item_count: usize) -> Self {
        Self {
            has_inner_header,
            has_inner_footer,
            item_count,
        }
    }

    pub fn has_inner_header(&self) -> bool {
        self.has_inner_header
    }

    pub fn has_inner_footer(&self) -> bool {
        self.has_inner_footer
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn slot_count(&self) -> usize {
        self.item_count + usize::from(self.has_inner_header) + usize::from(self.has_inner_footer)
    }

    pub fn is_header_slot(&self, slot: usize) -> bool {
        self.has_inner_header && slot == 0
    }

    pub fn is_footer_slot(&self, slot: usize) -> bool {
        self.has_inner_footer && slot + 1 == self.slot_count()
    }

    /// Maps a slot index to its logical data index, or `None` for header and
    /// footer slots (and out-of-range slots).
    pub fn to_data_index(&self, slot: usize) -> Option<usize> {
        if self.is_header_slot(slot) || self.is_footer_slot(slot) {
            return None;
        }
        let data_index = slot.checked_sub(usize::from(self.has_inner_header))?;
        (data_index < self.item_count).then_some(data_index)
    }

    /// Maps a logical data index to its slot index.
    ///
    /// `data_index` must be a valid index into the data sequence.
    pub fn slot_for_data_index(&self, data_index: usize) -> usize {
        debug_assert!(
            data_index < self.item_count,
            "data index out of range (index={data_index}, count={})",
            self.item_count
        );
        data_index + usize::from(self.has_inner_header)
    }

    pub fn slot_at(&self, slot: usize) -> Option<Slot> {
        if slot >= self.slot_count() {
            return None;
        }
        if self.is_header_slot(slot) {
            return Some(Slot::Header);
        }
        if self.is_footer_slot(slot) {
            return Some(Slot::Footer);
        }
        self.to_data_index(slot).map(Slot::Item)
    }
}
