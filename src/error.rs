use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeapError>;

/// Conditions reported by the mutating heap operations.
///
/// A failed operation never leaves the heap partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("heap is empty")]
    Empty,

    #[error("invalid position {position}, live positions are 1..={len}")]
    InvalidIndex { position: usize, len: usize },

    #[error("cannot build a heap of {len} elements with capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
}
