//! Schedulable task records

use std::fmt;

/// A unit of work held by a [`PriorityQueue`](crate::priority_queue::PriorityQueue)
///
/// Only `priority` takes part in queue ordering; `arrival_time` and `deadline`
/// are carried along for the caller. Ties between equal priorities are
/// extracted in no particular order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    /// Identifier looked up by
    /// [`increase_priority`](crate::priority_queue::PriorityQueue::increase_priority)
    pub task_id: String,
    /// Higher values are extracted first
    pub priority: i64,
    pub arrival_time: i64,
    pub deadline: i64,
}

impl Task {
    /// Creates a new task
    pub fn new(
        task_id: impl Into<String>,
        priority: i64,
        arrival_time: i64,
        deadline: i64,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            priority,
            arrival_time,
            deadline,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task(ID={}, Priority={})", self.task_id, self.priority)
    }
}
