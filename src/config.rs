/// What a heap does when an insert or build would exceed its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
    /// Reject with [`HeapError::Full`](crate::HeapError::Full) or
    /// [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded).
    #[default]
    Fixed,
    /// Double the capacity (or grow to the requested size, if larger).
    Doubling,
}

/// How `remove_at` restores order after moving the last element into the
/// vacated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Removal {
    /// Sift the replacement up, and down if it did not move.
    #[default]
    Repair,
    /// Only sift down. A replacement larger than its new parent is left in
    /// place, so the heap can end up invalid.
    SiftDownOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    pub capacity: usize,
    pub growth: Growth,
    pub removal: Removal,
}

impl HeapConfig {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            growth: Growth::Fixed,
            removal: Removal::Repair,
        }
    }

    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    pub fn removal(mut self, removal: Removal) -> Self {
        self.removal = removal;
        self
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
