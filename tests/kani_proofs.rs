//! Kani verification proofs for heapsort and the priority queue
//!
//! Kani is AWS's model checker for Rust. It checks all possible executions up
//! to the unwind bound, so the inputs here are small fixed-size arrays.
//!
//! To run these proofs:
//!   cargo kani --tests

#[allow(unused_imports)]
use rust_binary_heaps::heapsort::{build_heap, heapsort};
#[allow(unused_imports)]
use rust_binary_heaps::traits::{is_heap, MaxFirst};
#[allow(unused_imports)]
use rust_binary_heaps::{PriorityQueue, Task};

/// Proof that heapsort leaves any 5-element array in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heapsort_sorts() {
    let mut data: [u8; 5] = kani::any();
    heapsort(&mut data);

    for i in 1..data.len() {
        assert!(data[i - 1] <= data[i]);
    }
}

/// Proof that heapsort preserves the multiset of elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heapsort_is_permutation() {
    let original: [u8; 4] = kani::any();
    let mut data = original;
    heapsort(&mut data);

    let sum_before: u32 = original.iter().map(|&x| x as u32).sum();
    let sum_after: u32 = data.iter().map(|&x| x as u32).sum();
    assert!(sum_before == sum_after);

    let probe: u8 = kani::any();
    let count = |a: &[u8; 4]| a.iter().filter(|&&x| x == probe).count();
    assert!(count(&original) == count(&data));
}

/// Proof that build_heap establishes the heap invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_heap_invariant() {
    let mut data: [i8; 6] = kani::any();
    build_heap(&mut data);
    assert!(is_heap(&data, &MaxFirst));
}

/// Proof that extract_max returns the larger of two priorities first
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_extract_max_order() {
    let p1: i64 = kani::any();
    let p2: i64 = kani::any();

    let mut queue = PriorityQueue::new();
    queue.insert(Task::new("a", p1, 0, 0));
    queue.insert(Task::new("b", p2, 0, 0));

    let first = queue.extract_max().unwrap().priority;
    let second = queue.extract_max().unwrap().priority;
    assert!(first >= second);
    assert!(queue.is_empty());
}
