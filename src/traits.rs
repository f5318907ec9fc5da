//! Ordering predicates for array-backed heaps
//!
//! Every heap in this crate is a *max*-heap with respect to some ordering: the
//! element the ordering ranks highest sits at the root. Rather than hard-coding
//! `>` (or flipping `Ord` on the element type to trick a min-heap into acting
//! as a max-heap), the heap routines take a [`HeapOrder`] that decides which of
//! two elements belongs closer to the root.
//!
//! - [`MaxFirst`]: largest element at the root (the classic max-heap)
//! - [`MinFirst`]: smallest element at the root (inverted comparison)
//! - [`ByKey`]: largest projected key at the root
//!
//! Plain closures `Fn(&T, &T) -> bool` are accepted as orders too.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::heapsort::heapsort_by;
//! use rust_binary_heaps::traits::{is_heap, MaxFirst, MinFirst};
//!
//! let mut data = vec![4, 1, 3, 2];
//! heapsort_by(&mut data, &MinFirst);
//! assert_eq!(data, vec![4, 3, 2, 1]);
//!
//! assert!(is_heap(&[9, 4, 7, 1], &MaxFirst));
//! assert!(!is_heap(&[1, 4, 7, 9], &MaxFirst));
//! ```

/// Decides which of two elements belongs closer to the root of a heap
pub trait HeapOrder<T: ?Sized> {
    /// Returns true if `a` must sit above `b`
    ///
    /// Must be a strict ordering: `above(x, x)` is false.
    fn above(&self, a: &T, b: &T) -> bool;
}

/// Max-heap ordering over `Ord`: the greatest element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> HeapOrder<T> for MaxFirst {
    #[inline]
    fn above(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Inverted ordering over `Ord`: the least element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> HeapOrder<T> for MinFirst {
    #[inline]
    fn above(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Max-heap ordering over a key extracted from each element
///
/// ```rust
/// use rust_binary_heaps::traits::{ByKey, HeapOrder};
///
/// let by_len = ByKey(|s: &&str| s.len());
/// assert!(by_len.above(&"three", &"one"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> HeapOrder<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn above(&self, a: &T, b: &T) -> bool {
        (self.0)(a) > (self.0)(b)
    }
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn above(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Index of the parent of a non-root node
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Indices of the left and right children of a node
#[inline]
pub(crate) fn children(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

/// Returns true if `data` satisfies the heap invariant under `order`
///
/// No child may sit above its parent. Empty and single-element slices are
/// trivially heaps.
pub fn is_heap<T, O: HeapOrder<T> + ?Sized>(data: &[T], order: &O) -> bool {
    (1..data.len()).all(|i| !order.above(&data[i], &data[parent(i)]))
}
