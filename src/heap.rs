use std::fmt;

use crate::config::{Growth, HeapConfig, Removal};
use crate::error::{HeapError, Result};
use crate::sift::{self, sift_down, sift_up};
use crate::sort::{build_max_heap, heap_sort};

/// An array-backed binary max-heap with a caller-chosen capacity.
///
/// Once `len() == capacity()` further inserts are rejected with
/// [`HeapError::Full`] unless the heap was configured with
/// [`Growth::Doubling`].
#[derive(Debug, Clone)]
pub struct Heap<T: Ord> {
    data: Vec<T>,
    config: HeapConfig,
}

impl<T: Ord> Heap<T> {
    pub fn new(capacity: usize) -> Self {
        Self::with_config(HeapConfig::new(capacity))
    }

    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            data: Vec::with_capacity(config.capacity),
            config,
        }
    }

    /// Builds a heap over `data` whose capacity is exactly `data.len()`.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        build_max_heap(&mut data);
        let config = HeapConfig::new(data.len());
        Self { data, config }
    }

    /// Adds `key`, sifting it up to its place. O(log n).
    pub fn insert(&mut self, key: T) -> Result<()> {
        if self.is_full() {
            self.make_room(self.data.len() + 1, |capacity| HeapError::Full {
                capacity,
            })?;
        }
        self.data.push(key);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last);
        Ok(())
    }

    /// Removes and returns the largest key. O(log n).
    pub fn extract_max(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let max = self.data.swap_remove(0);
        let len = self.data.len();
        sift_down(&mut self.data, 0, len);
        Ok(max)
    }

    /// Removes and returns the key at the 1-based `position`, where position
    /// `1` is the root.
    ///
    /// The last live key takes the vacated slot and is then moved according
    /// to the configured [`Removal`] mode.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        let len = self.data.len();
        if position == 0 || position > len {
            return Err(HeapError::InvalidIndex { position, len });
        }
        let i = position - 1;
        let removed = self.data.swap_remove(i);
        let len = self.data.len();
        if i < len {
            match self.config.removal {
                Removal::Repair => {
                    if sift_up(&mut self.data, i) == i {
                        sift_down(&mut self.data, i, len);
                    }
                }
                Removal::SiftDownOnly => sift_down(&mut self.data, i, len),
            }
        }
        Ok(removed)
    }

    /// Replaces the contents with `items` and heapifies them bottom-up in
    /// O(n).
    pub fn build(&mut self, items: Vec<T>) -> Result<()> {
        if items.len() > self.config.capacity {
            let len = items.len();
            self.make_room(len, |capacity| HeapError::CapacityExceeded { len, capacity })?;
        }
        self.data.clear();
        self.data.extend(items);
        build_max_heap(&mut self.data);
        Ok(())
    }

    fn make_room(&mut self, needed: usize, err: impl FnOnce(usize) -> HeapError) -> Result<()> {
        match self.config.growth {
            Growth::Fixed => Err(err(self.config.capacity)),
            Growth::Doubling => {
                let capacity = needed.max(self.config.capacity.saturating_mul(2));
                self.data.reserve(capacity - self.data.len());
                self.config.capacity = capacity;
                Ok(())
            }
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.config.capacity
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// The live region in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn is_valid(&self) -> bool {
        sift::is_max_heap(&self.data)
    }

    /// Smallest live key, found by a linear scan.
    pub fn min_key(&self) -> Option<&T> {
        sift::min_key(&self.data)
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        heap_sort(&mut self.data);
        self.data
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::with_config(HeapConfig::default())
    }
}

impl<T: Ord> From<Heap<T>> for Vec<T> {
    fn from(heap: Heap<T>) -> Self {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Ord> IntoIterator for &'a Heap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, key) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
