//! In-place heapsort
//!
//! The classic two-phase algorithm over an implicit binary heap stored in the
//! slice itself (children of `i` at `2i + 1` and `2i + 2`):
//!
//! 1. Build a max-heap bottom-up by calling [`heapify`] on every internal node,
//!    from the last parent down to the root.
//! 2. Repeatedly swap the root (the maximum) with the last unsorted element,
//!    shrink the heap boundary by one, and re-heapify the root.
//!
//! The result is ascending order. The sort is not stable and allocates nothing.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `heapify`      | O(log n)   |
//! | `build_heap`   | O(n)       |
//! | `heapsort`     | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::heapsort::heapsort;
//!
//! let mut data = vec![12, 11, 13, 5, 6, 7];
//! heapsort(&mut data);
//! assert_eq!(data, vec![5, 6, 7, 11, 12, 13]);
//! ```

use crate::traits::{children, HeapOrder, MaxFirst};

/// Restores the max-heap property for the subtree rooted at `index`
///
/// Only the first `size` elements of `data` are treated as part of the heap.
/// Both child subtrees of `index` must already be valid heaps.
pub fn heapify<T: Ord>(data: &mut [T], size: usize, index: usize) {
    heapify_by(data, size, index, &MaxFirst);
}

/// Like [`heapify`], with the root chosen by `order` instead of `>`
pub fn heapify_by<T, O>(data: &mut [T], size: usize, mut index: usize, order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    debug_assert!(size <= data.len());
    loop {
        let (left, right) = children(index);
        let mut largest = index;

        if left < size && order.above(&data[left], &data[largest]) {
            largest = left;
        }
        if right < size && order.above(&data[right], &data[largest]) {
            largest = right;
        }

        if largest == index {
            break;
        }
        data.swap(index, largest);
        index = largest;
    }
}

/// Rearranges `data` into a max-heap
pub fn build_heap<T: Ord>(data: &mut [T]) {
    build_heap_by(data, &MaxFirst);
}

/// Rearranges `data` into a heap under `order`
///
/// Internal nodes are visited right to left, so every call to [`heapify_by`]
/// sees children that are already heaps.
pub fn build_heap_by<T, O>(data: &mut [T], order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    let size = data.len();
    for index in (0..size / 2).rev() {
        heapify_by(data, size, index, order);
    }
}

/// Sorts `data` in ascending order
///
/// Empty and single-element slices are left untouched.
pub fn heapsort<T: Ord>(data: &mut [T]) {
    heapsort_by(data, &MaxFirst);
}

/// Sorts `data` so that elements ranked highest by `order` end up last
///
/// With [`MaxFirst`] this is ascending order; with
/// [`MinFirst`](crate::traits::MinFirst) it is descending.
pub fn heapsort_by<T, O>(data: &mut [T], order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    build_heap_by(data, order);

    for end in (1..data.len()).rev() {
        data.swap(0, end);
        heapify_by(data, end, 0, order);
    }
}

/// Sorts `data` in ascending order of the key extracted by `key`
pub fn heapsort_by_key<T, K, F>(data: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heapsort_by(data, &crate::traits::ByKey(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{is_heap, MinFirst};

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: Vec<i32> = Vec::new();
        heapsort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        heapsort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_basic_sort() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        heapsort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);
    }

    #[test]
    fn test_ascending_input() {
        let mut data: Vec<i32> = (0..100).collect();
        heapsort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_input() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        heapsort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_equal() {
        let mut data = vec![7; 33];
        heapsort(&mut data);
        assert_eq!(data, vec![7; 33]);
    }

    #[test]
    fn test_heapify_sifts_root_down() {
        // Children of the root are already heaps; only the root is out of place.
        let mut data = vec![1, 9, 8, 5, 4, 7, 6];
        heapify(&mut data, 7, 0);
        assert_eq!(data[0], 9);
        assert!(is_heap(&data, &MaxFirst));
    }

    #[test]
    fn test_heapify_respects_size_bound() {
        let mut data = vec![1, 2, 100];
        heapify(&mut data, 2, 0);
        // Index 2 lies outside the heap and must not be considered.
        assert_eq!(data, vec![2, 1, 100]);
    }

    #[test]
    fn test_heapify_on_leaf_is_noop() {
        let mut data = vec![1, 2, 3];
        heapify(&mut data, 3, 2);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_build_heap() {
        let mut data = vec![4, 10, 3, 5, 1, 8, 2, 9];
        build_heap(&mut data);
        assert!(is_heap(&data, &MaxFirst));
        assert_eq!(data[0], 10);
    }

    #[test]
    fn test_descending_with_min_first() {
        let mut data = vec![2, 8, 5, 3, 9, 1];
        heapsort_by(&mut data, &MinFirst);
        assert_eq!(data, vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_key() {
        let mut words = vec!["pear", "fig", "banana", "kiwi", "apple"];
        heapsort_by_key(&mut words, |w| w.len());
        let lens: Vec<usize> = words.iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![3, 4, 4, 5, 6]);
    }

    #[test]
    fn test_strings() {
        let mut data: Vec<String> = ["delta", "alpha", "charlie", "bravo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        heapsort(&mut data);
        assert_eq!(data, vec!["alpha", "bravo", "charlie", "delta"]);
    }
}
