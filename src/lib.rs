//! A fixed-capacity, array-backed binary max-heap.
//!
//! ```
//! use fixed_heap::{Heap, HeapError};
//!
//! let mut heap = Heap::new(2);
//! heap.insert(15).unwrap();
//! heap.insert(30).unwrap();
//! assert_eq!(Err(HeapError::Full { capacity: 2 }), heap.insert(5));
//! assert_eq!(Ok(30), heap.extract_max());
//! ```

pub mod config;
pub mod error;
pub mod heap;
pub mod sift;
pub mod sort;

pub use config::{Growth, HeapConfig, Removal};
pub use error::{HeapError, Result};
pub use heap::Heap;
pub use sift::{is_max_heap, min_key};
pub use sort::{build_max_heap, heap_sort};
