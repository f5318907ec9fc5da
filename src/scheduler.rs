//! Scripted task-scheduler walkthrough of [`PriorityQueue`]
//!
//! Inserts four sample tasks, prints the queue, drains it in priority order,
//! then re-queues `T3` and bumps its priority from 2 to 6.

use std::io::{self, Write};

use crate::priority_queue::PriorityQueue;
use crate::task::Task;

/// The four tasks the walkthrough schedules
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("T1", 3, 0, 5),
        Task::new("T2", 5, 1, 3),
        Task::new("T3", 2, 2, 6),
        Task::new("T4", 4, 3, 4),
    ]
}

/// Runs the walkthrough, writing its trace to `out`
pub fn simulate_scheduler<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Priority Queue Task Scheduler ---")?;
    let mut queue = PriorityQueue::new();

    for task in sample_tasks() {
        writeln!(out, "Inserted: {task}")?;
        queue.insert(task);
    }

    writeln!(out, "\nQueue State: {queue}")?;

    writeln!(out, "\nExtracting tasks by priority:")?;
    while let Some(task) = queue.extract_max() {
        writeln!(out, "Processing: {task}")?;
    }

    writeln!(out, "\nIncreasing priority of T3 to 6:")?;
    queue.insert(Task::new("T3", 2, 2, 6));
    if queue.increase_priority("T3", 6).is_err() {
        writeln!(out, "Task not found.")?;
    }
    writeln!(out, "{queue}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tasks() {
        let tasks = sample_tasks();
        let ids: Vec<&str> = tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3", "T4"]);
        let priorities: Vec<i64> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![3, 5, 2, 4]);
    }

    #[test]
    fn test_trace_ends_with_bumped_task() {
        let mut out = Vec::new();
        simulate_scheduler(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().ends_with("PriorityQueue([Task(ID=T3, Priority=6)])"));
        assert!(!text.contains("Task not found."));
    }
}
