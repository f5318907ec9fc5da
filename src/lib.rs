//! Binary Heaps for Rust
//!
//! This crate provides the array-backed binary max-heap and its two classic
//! applications:
//!
//! - **Heapsort**: in-place O(n log n) sort built from bottom-up heap
//!   construction and repeated extraction of the maximum
//! - **Priority Queue**: a max-priority queue of [`Task`]s with insert,
//!   extract-max and priority update
//!
//! Around those sit a wall-clock comparison of heapsort against quicksort and
//! mergesort ([`compare`]) and a scripted task-scheduler walkthrough
//! ([`scheduler`]). Both are also shipped as the `compare_sorts` and
//! `scheduler` binaries.
//!
//! Heap ordering is pluggable through [`HeapOrder`]; every heap here puts the
//! element its order ranks highest at the root.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::heapsort::heapsort;
//! use rust_binary_heaps::{PriorityQueue, Task};
//!
//! let mut data = vec![5, 2, 8, 1];
//! heapsort(&mut data);
//! assert_eq!(data, vec![1, 2, 5, 8]);
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(Task::new("low", 1, 0, 10));
//! queue.insert(Task::new("high", 9, 1, 5));
//! assert_eq!(queue.extract_max().map(|t| t.priority), Some(9));
//! ```

pub mod compare;
pub mod heapsort;
pub mod priority_queue;
pub mod scheduler;
pub mod sorting;
pub mod task;
pub mod traits;

// Re-export the main types for convenience
pub use priority_queue::{PriorityQueue, QueueError};
pub use task::Task;
pub use traits::HeapOrder;
