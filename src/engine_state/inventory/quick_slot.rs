use super::QUICK_SLOT_SIZE;

/// Tracks which quick slot is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSlotManager {
    current: usize,
}

impl QuickSlotManager {
    /// Starts on slot 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected quick slot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Selects `index`; out-of-range indices are ignored.
    pub fn set_quick_slot_index(&mut self, index: usize) {
        if index < QUICK_SLOT_SIZE {
            self.current = index;
        }
    }

    /// Selects the next slot, wrapping to 0.
    pub fn increase_quick_slot_index(&mut self) {
        self.current = (self.current + 1) % QUICK_SLOT_SIZE;
    }

    /// Selects the previous slot, wrapping to the last.
    pub fn decrease_quick_slot_index(&mut self) {
        self.current = (self.current + QUICK_SLOT_SIZE - 1) % QUICK_SLOT_SIZE;
    }
}
