//! Max-heap primitives over plain slices.
//!
//! Positions here are 0-based: the root is `0`, the parent of `i` is
//! `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.

#[inline]
pub(crate) fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub(crate) fn left(i: usize) -> usize {
    2 * i + 1
}

/// Moves `data[pos]` towards the root while it is strictly greater than its
/// parent. Returns the position it settled at.
pub(crate) fn sift_up<T: Ord>(data: &mut [T], mut pos: usize) -> usize {
    while pos > 0 {
        let p = parent(pos);
        if data[pos] <= data[p] {
            break;
        }
        data.swap(pos, p);
        pos = p;
    }
    pos
}

/// Moves `data[start]` towards the leaves of the live region `data[..end]`,
/// swapping with the larger child while that child is strictly greater.
/// Ties keep the current node in place.
pub(crate) fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) {
    let mut i = start;
    loop {
        let l = left(i);
        let r = l + 1;
        let mut largest = i;
        if l < end && data[l] > data[largest] {
            largest = l;
        }
        if r < end && data[r] > data[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        data.swap(largest, i);
        i = largest;
    }
}

/// Returns `true` when every parent in `data` is `>=` both of its children.
///
/// An empty slice is a valid heap.
pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    let n = data.len();
    for i in 0..n / 2 {
        let l = left(i);
        if data[l] > data[i] {
            return false;
        }
        if l + 1 < n && data[l + 1] > data[i] {
            return false;
        }
    }
    true
}

/// Linear scan for the smallest key. The heap order gives no shortcut here:
/// the minimum can sit at any leaf.
pub fn min_key<T: Ord>(data: &[T]) -> Option<&T> {
    match data {
        [] => None,
        [only] => Some(only),
        _ => data.iter().min(),
    }
}
