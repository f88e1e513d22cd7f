use crate::sift::sift_down;

/// Rearranges `data` into a max-heap in place, bottom-up.
///
/// Every internal node is sifted down, from the last parent back to the root,
/// which is O(n) overall.
pub fn build_max_heap<T: Ord>(data: &mut [T]) {
    let l = data.len();
    for i in (0..l / 2).rev() {
        sift_down(data, i, l);
    }
}

/// Sorts `data` in ascending order in place.
///
/// The slice is first turned into a max-heap, then the root is repeatedly
/// swapped to the end of a shrinking live region.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    build_max_heap(data);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}
