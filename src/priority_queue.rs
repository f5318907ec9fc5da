//! Max-priority queue of [`Task`]s
//!
//! An array-backed binary max-heap keyed on [`Task::priority`]. The task with
//! the highest priority is always at index 0.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity                      |
//! |---------------------|---------------------------------|
//! | `insert`            | O(log n) amortized              |
//! | `extract_max`       | O(log n)                        |
//! | `peek`              | O(1)                            |
//! | `increase_priority` | O(n) (linear scan + full rebuild) |
//! | `is_empty` / `len`  | O(1)                            |
//!
//! `increase_priority` does not track where each task lives in the heap, so it
//! finds the task by scanning and then rebuilds the heap bottom-up.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::priority_queue::PriorityQueue;
//! use rust_binary_heaps::task::Task;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(Task::new("T1", 3, 0, 5));
//! queue.insert(Task::new("T2", 5, 1, 3));
//! queue.insert(Task::new("T3", 2, 2, 6));
//!
//! queue.increase_priority("T3", 6).unwrap();
//! assert_eq!(queue.extract_max().map(|t| t.task_id), Some("T3".to_string()));
//! assert_eq!(queue.extract_max().map(|t| t.priority), Some(5));
//! ```

use std::fmt;

use log::{debug, warn};

use crate::heapsort::{build_heap_by, heapify_by};
use crate::task::Task;
use crate::traits::{parent, HeapOrder};

/// Error type for priority queue operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// No queued task has the requested identifier
    TaskNotFound(String),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Orders tasks by priority, highest at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority;

impl HeapOrder<Task> for ByPriority {
    #[inline]
    fn above(&self, a: &Task, b: &Task) -> bool {
        a.priority > b.priority
    }
}

/// A max-priority queue of tasks
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    /// Tasks in heap order
    heap: Vec<Task>,
}

impl PriorityQueue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` tasks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if no tasks are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued tasks
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds a task to the queue
    ///
    /// Identifiers are not checked for uniqueness. Queueing two tasks with the
    /// same id is allowed, but [`increase_priority`](Self::increase_priority)
    /// will only ever find one of them.
    pub fn insert(&mut self, task: Task) {
        self.heap.push(task);
        self.sift_up(self.heap.len() - 1);
    }

    /// Returns the highest-priority task without removing it
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first()
    }

    /// Removes and returns the highest-priority task
    ///
    /// Returns `None` when the queue is empty.
    pub fn extract_max(&mut self) -> Option<Task> {
        if self.heap.is_empty() {
            return None;
        }

        let last_idx = self.heap.len() - 1;
        self.heap.swap(0, last_idx);
        let result = self.heap.pop();

        let size = self.heap.len();
        heapify_by(&mut self.heap, size, 0, &ByPriority);

        result
    }

    /// Sets the priority of the task with the given id and restores heap order
    ///
    /// The first task found with a matching id is updated and the whole heap is
    /// rebuilt. Despite the name, a lower priority is accepted as well.
    ///
    /// # Errors
    /// Returns [`QueueError::TaskNotFound`] if no queued task has `task_id`.
    /// The queue is left unchanged in that case.
    pub fn increase_priority(
        &mut self,
        task_id: &str,
        new_priority: i64,
    ) -> Result<(), QueueError> {
        let Some(index) = self.heap.iter().position(|t| t.task_id == task_id) else {
            warn!("Task not found: {task_id}");
            return Err(QueueError::TaskNotFound(task_id.to_string()));
        };

        debug!(
            "task {task_id}: priority {} -> {new_priority}, rebuilding {} entries",
            self.heap[index].priority,
            self.heap.len()
        );
        self.heap[index].priority = new_priority;
        build_heap_by(&mut self.heap, &ByPriority);
        Ok(())
    }

    /// Iterates over the queued tasks in heap storage order
    ///
    /// Only the first item is guaranteed to be the maximum.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.heap.iter()
    }

    /// Move the task at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_idx = parent(index);
            if ByPriority.above(&self.heap[index], &self.heap[parent_idx]) {
                self.heap.swap(index, parent_idx);
                index = parent_idx;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        crate::traits::is_heap(&self.heap, &ByPriority)
    }
}

impl Extend<Task> for PriorityQueue {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.insert(task);
        }
    }
}

impl FromIterator<Task> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut heap: Vec<Task> = iter.into_iter().collect();
        build_heap_by(&mut heap, &ByPriority);
        Self { heap }
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityQueue([")?;
        for (i, task) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{task}")?;
        }
        write!(f, "])")
    }
}
