//! Reference sorts used as baselines against [`heapsort`](crate::heapsort::heapsort)
//!
//! Both algorithms are written in their textbook, allocating form: they take a
//! slice and return a freshly sorted vector, leaving the input untouched.
//!
//! - [`quicksort`]: random pivot, three-way partition (less / equal / greater)
//! - [`mergesort`]: top-down split at the midpoint, stable merge

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a sorted copy of `data` using quicksort with a random pivot
///
/// The pivot is drawn from the input with `rng`. Elements equal to the pivot
/// are gathered into their own partition, so runs of duplicates never recurse.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rust_binary_heaps::sorting::quicksort;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(quicksort(&[3, 1, 2, 1], &mut rng), vec![1, 1, 2, 3]);
/// ```
pub fn quicksort<T, R>(data: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let Some(pivot) = data.choose(rng) else {
        return Vec::new();
    };
    if data.len() == 1 {
        return data.to_vec();
    }

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in data {
        match item.cmp(pivot) {
            std::cmp::Ordering::Less => less.push(item.clone()),
            std::cmp::Ordering::Equal => equal.push(item.clone()),
            std::cmp::Ordering::Greater => greater.push(item.clone()),
        }
    }

    let mut sorted = quicksort(&less, rng);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&greater, rng));
    sorted
}

/// Returns a sorted copy of `data` using top-down mergesort
///
/// Stable: equal elements keep their relative order.
pub fn mergesort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let mid = data.len() / 2;
    let left = mergesort(&data[..mid]);
    let right = mergesort(&data[mid..]);
    merge(left, right)
}

/// Merges two ascending runs into one ascending vector
///
/// On ties the element from `left` is taken first.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if r < l {
            result.extend(right.next());
        } else {
            result.extend(left.next());
        }
    }
    result.extend(left);
    result.extend(right);
    result
}
